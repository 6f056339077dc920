//! District hover example for guidebook-rs
//!
//! Replays a pointer sweep over the shipped district maps: every feature
//! is looked up the way a map widget would on `mousemove`.

use guide_core::map::match_features;
use guide_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Guide District Hover Example ===\n");

    let guide = Guide::embedded()?;
    let mut maps = MapCache::new(FileFetcher::new(Guide::default_map_dir()));

    for region in ["north-region", "greater-lisbon", "algarve-region"] {
        println!("--- {region} ---");
        let Some(map) = maps.district_map(region) else {
            println!("(no district map, the map stays unpopulated)\n");
            continue;
        };

        for m in match_features(map, guide.districts_for(region)) {
            match m.matched {
                Some(hit) => println!(
                    "{:<18} -> {} [{}]",
                    m.feature_name, hit.district.name, hit.tier
                ),
                None => println!("{:<18} -> Coming soon", m.feature_name),
            }
        }
        println!();
    }

    // A failed file is remembered and not requested again
    println!(
        "Cached map files: {} (algarve failed: {})",
        maps.len(),
        maps.has_failed("algarve-region-districts.json")
    );

    Ok(())
}
