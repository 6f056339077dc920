//! Basic usage example for guidebook-rs
//!
//! This example demonstrates how to:
//! - Load the embedded guide
//! - Look up region cards by display name
//! - Show the country page sections
//! - Render the time-zone clock

use chrono::Utc;
use guide_core::climate::best_time_to_visit;
use guide_core::prelude::*;
use guide_core::sections::{group_safety_tips, sort_languages};

fn main() -> Result<()> {
    println!("=== Guide Basic Usage Example ===\n");

    let guide = Guide::embedded()?;
    let stats = guide.stats();
    println!(
        "✓ Loaded {} country, {} regions, {} districts\n",
        stats.countries, stats.regions, stats.districts
    );

    let Some(portugal) = guide.country("portugal") else {
        println!("Portugal is missing from the dataset");
        return Ok(());
    };

    // Example 1: Region cards, including one the guide does not know
    println!("--- Example 1: Region cards ---");
    for name in ["Algarve Region", "greater lisbon", "Atlantis"] {
        let card = RegionCard::lookup(name, portugal.regions());
        println!("{} -> capital {}, population {}", card.title, card.capital, card.population);
    }
    println!();

    // Example 2: Best time to visit per region
    println!("--- Example 2: Best time to visit ---");
    for region in portugal.regions() {
        println!("{:<28} {}", region.name, best_time_to_visit(&guide, portugal, &region.slug));
    }
    println!();

    // Example 3: Page sections
    println!("--- Example 3: Safety and languages ---");
    for group in group_safety_tips(&portugal.safety_tips) {
        println!("{} {} ({} tips)", group.icon, group.heading, group.tips.len());
    }
    let languages: Vec<_> = sort_languages(&portugal.languages)
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    println!("Languages: {}\n", languages.join(", "));

    // Example 4: Clocks
    println!("--- Example 4: Local times ---");
    let board = ClockBoard::from_time_zones(portugal.time_zones());
    for line in board.render(Utc::now()) {
        println!("{} ({}): {}", line.name, line.offset_label, line.local_time);
    }

    Ok(())
}
