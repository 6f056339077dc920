//! guide-cli — Command-line interface for guide-core
//!
//! Browse the bundled travel guide from a terminal: region cards, district
//! lists, map-name resolution, live clocks for each time zone and the
//! country page sections (safety, languages, visas, entry points, climate).
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ guide stats
//!
//! - Region card by display name (case-insensitive)
//!   $ guide region "algarve region"
//!
//! - Resolve a name as a map file spells it
//!   $ guide resolve north-region "Bragança"
//!
//! - Check every feature of a district map against the dataset
//!   $ guide hover greater-lisbon
//!
//! - Live clocks, re-rendered every minute
//!   $ guide clock --watch
//!
//! Configuration
//! -------------
//!
//! `GUIDE_DATA_PATH`, `GUIDE_MAP_DIR`, `GUIDE_MAP_BASE_URL` and
//! `GUIDE_LOG_LEVEL` are read from the environment or a `.env` file;
//! `--data`, `--maps` and `--log-level` override them. Without a data path
//! the dataset compiled into `guide-core` is used.
mod args;
mod config;
mod telemetry;

use crate::args::{CliArgs, Commands};
use crate::config::GuideConfig;
use anyhow::{anyhow, Context};
use chrono::Utc;
use clap::Parser;
use guide_core::climate::{
    best_time_to_visit, crowd_level, months_to_avoid, rainfall_band, region_direction,
    region_tags, seasons_for_region, temperature_band,
};
use guide_core::clock::{ClockBoard, ClockLine, REFRESH_INTERVAL};
use guide_core::map::{match_features, FileFetcher, MapCache, MapFetcher};
use guide_core::model::{Country, RegionSeasons};
use guide_core::sections::{
    entry_points_by_kind, group_safety_tips, requirements_for_citizen, sort_languages,
};
use guide_core::text::split_sentences;
use guide_core::{find_region, resolve_in_region, Guide, RegionCard};
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = GuideConfig::load()?;
    config.apply_args(&args);
    telemetry::init(&config.log_level)?;

    let guide = load_guide(&config)?;
    let country = guide
        .country(&args.country)
        .ok_or_else(|| anyhow!("country '{}' not in dataset", args.country))?;
    let json = args.json;

    match args.command {
        Commands::Stats => emit(json, &guide.stats(), |stats| {
            println!("Guide statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Districts: {}", stats.districts);
        })?,

        Commands::Regions => emit(json, &country.regions, |regions| {
            for r in regions {
                println!("{} ({}) - capital {}", r.name, r.slug, r.capital);
            }
        })?,

        Commands::Region { name } => region_report(&guide, country, &name, json)?,

        Commands::Districts { region } => {
            let districts = guide.districts_for(&region);
            if districts.is_empty() {
                eprintln!("No districts stored for region: {region}");
            } else {
                emit(json, &districts, |districts| {
                    for d in districts.iter() {
                        println!("{} ({}) - {}", d.name, d.slug, d.description);
                    }
                })?;
            }
        }

        Commands::Resolve { region, name } => match resolve_in_region(&guide, &region, &name) {
            Some(hit) => emit(json, &hit, |hit| {
                println!("{} -> {} [{}]", name, hit.district.name, hit.tier);
            })?,
            None => eprintln!("No district in {region} matches: {name}"),
        },

        Commands::Hover { region } => {
            let mut maps = map_cache(&config)?;
            match maps.district_map(&region) {
                Some(map) => {
                    let matches = match_features(map, guide.districts_for(&region));
                    emit(json, &matches, |matches| {
                        for m in matches {
                            match &m.matched {
                                Some(hit) => println!(
                                    "{} -> {} [{}]",
                                    m.feature_name, hit.district.name, hit.tier
                                ),
                                None => println!("{} -> coming soon", m.feature_name),
                            }
                        }
                    })?;
                }
                None => eprintln!("No district map available for: {region}"),
            }
        }

        Commands::Clock { watch, ticks } => {
            let board = ClockBoard::from_time_zones(country.time_zones());
            let mut rendered = 0u32;
            loop {
                emit(json, board.render(Utc::now()).as_slice(), print_clock)?;
                rendered += 1;
                if !watch || ticks.is_some_and(|limit| rendered >= limit) {
                    break;
                }
                std::thread::sleep(REFRESH_INTERVAL);
            }
        }

        Commands::Safety => emit(json, &group_safety_tips(&country.safety_tips), |groups| {
            for g in groups {
                println!("{} {}", g.icon, g.heading);
                for tip in &g.tips {
                    println!("  - {tip}");
                }
            }
        })?,

        Commands::Languages => emit(json, &sort_languages(&country.languages), |langs| {
            for l in langs {
                let share = l.percentage.map(|p| format!("{p}%")).unwrap_or_default();
                let official = if l.official { " (official)" } else { "" };
                println!("{}{} {}", l.name, official, share);
            }
        })?,

        Commands::Visa { citizen } => {
            let reqs: Vec<_> = match &citizen {
                Some(c) => requirements_for_citizen(&country.visa_requirements, c),
                None => country.visa_requirements.iter().collect(),
            };
            if reqs.is_empty() {
                eprintln!("No visa rules listed for: {}", citizen.unwrap_or_default());
            } else {
                emit(json, &reqs, |reqs| {
                    for r in reqs {
                        println!("{} ({})", r.requirement, r.duration);
                        println!("  For: {}", r.for_citizens.join(", "));
                        if let Some(notes) = &r.notes {
                            println!("  {notes}");
                        }
                    }
                })?;
            }
        }

        Commands::EntryPoints => emit(json, &entry_points_by_kind(&country.entry_points), |g| {
            for (title, points) in [
                ("Airports", &g.airports),
                ("Border crossings", &g.borders),
                ("Ports", &g.ports),
            ] {
                println!("{title}:");
                for p in points {
                    let code = p.code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default();
                    println!("  - {}{} near {}", p.name, code, p.nearest_city);
                }
            }
        })?,

        Commands::Climate { region } => {
            let key = region.as_deref().unwrap_or("nationwide");
            let report = ClimateReport {
                region: key.to_string(),
                best_time: best_time_to_visit(&guide, country, key),
                months: country
                    .climate_for(key)
                    .iter()
                    .map(|m| ClimateRow {
                        month: &m.month,
                        high: m.average_high,
                        low: m.average_low,
                        temperature: temperature_band(m.average_high).label(),
                        rainfall: rainfall_band(m.rainfall).label(),
                        crowds: crowd_level(&m.month, m.crowd_level).as_str(),
                    })
                    .collect(),
            };
            emit(json, &report, |r| {
                println!("Climate ({})", r.region);
                for m in &r.months {
                    println!(
                        "  {:<10} {:>5.1}/{:<5.1} {:<5} {:<10} crowds {}",
                        m.month, m.high, m.low, m.temperature, m.rainfall, m.crowds
                    );
                }
                println!("Best time to visit: {}", r.best_time);
            })?;
        }
    }

    Ok(())
}

fn load_guide(config: &GuideConfig) -> anyhow::Result<Guide> {
    let Some(path) = &config.data_path else {
        return Ok(Guide::embedded()?);
    };

    #[cfg(feature = "cache")]
    let guide = Guide::load_cached(path);
    #[cfg(all(feature = "json", not(feature = "cache")))]
    let guide = Guide::load_from_path(path);
    #[cfg(not(feature = "json"))]
    let guide: guide_core::Result<Guide> = Err(guide_core::GuideError::InvalidData(
        "loading dataset files needs the 'json' feature".to_string(),
    ));

    guide.with_context(|| format!("loading dataset {}", path.display()))
}

fn map_cache(config: &GuideConfig) -> anyhow::Result<MapCache<Box<dyn MapFetcher>>> {
    #[cfg(feature = "fetch")]
    {
        if let Some(url) = &config.map_base_url {
            let fetcher = guide_core::map::HttpFetcher::new(url.clone())?;
            return Ok(MapCache::new(Box::new(fetcher)));
        }
    }
    #[cfg(not(feature = "fetch"))]
    {
        if config.map_base_url.is_some() {
            tracing::warn!("GUIDE_MAP_BASE_URL ignored: built without the 'fetch' feature");
        }
    }

    Ok(MapCache::new(Box::new(FileFetcher::new(config.map_dir.clone()))))
}

/// Print as pretty JSON or hand the value to the text renderer.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_clock(lines: &[ClockLine]) {
    for line in lines {
        println!("{:<24} {:<6} {}", line.name, line.offset_label, line.local_time);
    }
}

#[derive(Serialize)]
struct RegionReport<'a> {
    card: RegionCard,
    about: Vec<String>,
    best_time: Option<String>,
    months_to_avoid: &'a str,
    tags: &'a str,
    direction: &'a str,
    seasons: &'a RegionSeasons,
}

fn region_report(guide: &Guide, country: &Country, name: &str, json: bool) -> anyhow::Result<()> {
    let region = find_region(name, country.regions());
    let slug = region.map(|r| r.slug.as_str()).unwrap_or_default();
    let report = RegionReport {
        card: RegionCard::from_lookup(region, name),
        about: region
            .map(|r| split_sentences(&r.description))
            .unwrap_or_default(),
        best_time: region.map(|r| best_time_to_visit(guide, country, &r.slug)),
        months_to_avoid: months_to_avoid(guide, slug),
        tags: region_tags(guide, slug),
        direction: region_direction(guide, slug),
        seasons: seasons_for_region(guide, region.map_or(name, |r| r.name.as_str())),
    };

    emit(json, &report, |r| {
        let c = &r.card;
        println!("{}", c.title);
        println!("  Capital: {}", c.capital);
        println!("  Area: {}", c.area);
        println!("  Population: {}", c.population);
        if let Some(summary) = &c.summary {
            println!("  {summary}");
        }
        if !c.is_known() {
            return;
        }
        for sentence in &r.about {
            println!("  - {sentence}");
        }
        println!("  Located in the {} of {}", r.direction, country.name);
        println!("  Known for: {}", r.tags);
        if let Some(best) = &r.best_time {
            println!("  Best time to visit: {best}");
        }
        if !r.months_to_avoid.is_empty() {
            println!("  Avoid: {}", r.months_to_avoid);
        }
        println!("  Peak season: {}", r.seasons.peak_months.join(", "));
    })
}

#[derive(Serialize)]
struct ClimateReport<'a> {
    region: String,
    best_time: String,
    months: Vec<ClimateRow<'a>>,
}

#[derive(Serialize)]
struct ClimateRow<'a> {
    month: &'a str,
    high: f64,
    low: f64,
    temperature: &'static str,
    rainfall: &'static str,
    crowds: &'static str,
}
