use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for guide-cli
#[derive(Debug, Parser)]
#[command(
    name = "guide",
    version,
    about = "CLI for browsing the guide-core travel guide data"
)]
pub struct CliArgs {
    /// Dataset file (.json or .json.gz). Defaults to the embedded dataset.
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<PathBuf>,

    /// Directory with `<region>-districts.json` map files
    #[arg(short = 'm', long = "maps", global = true)]
    pub maps: Option<PathBuf>,

    /// Tracing filter, e.g. `info` or `guide_core=debug`
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Country slug to browse
    #[arg(short = 'c', long = "country", global = true, default_value = "portugal")]
    pub country: String,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List the regions of the country
    Regions,

    /// Show a region card by display name (case-insensitive, exact)
    Region {
        /// Display name, e.g. "Algarve Region"
        name: String,
    },

    /// List the districts stored for a region
    Districts {
        /// Region slug, e.g. north-region
        region: String,
    },

    /// Resolve a map feature name to a district
    Resolve {
        /// Region slug, e.g. north-region
        region: String,
        /// Name as the map spells it, e.g. "Bragança"
        name: String,
    },

    /// Resolve every feature of a region's district map
    Hover {
        /// Region slug, e.g. greater-lisbon
        region: String,
    },

    /// Local time in each of the country's time zones
    Clock {
        /// Keep re-rendering every minute
        #[arg(short = 'w', long = "watch")]
        watch: bool,

        /// Stop after this many renders when watching
        #[arg(long = "ticks")]
        ticks: Option<u32>,
    },

    /// Safety tips grouped by category
    Safety,

    /// Languages, official first
    Languages,

    /// Visa rules, optionally for one citizenship
    Visa {
        /// e.g. "United States"
        #[arg(long = "citizen")]
        citizen: Option<String>,
    },

    /// Airports, border crossings and ports
    EntryPoints,

    /// Monthly climate with bands and the best time to visit
    Climate {
        /// Region slug; nationwide when omitted
        region: Option<String>,
    },
}
