// crates/guide-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and hands the bytes to
//! `serde_json`. The optional binary cache lives in [`cache`].

use crate::error::{GuideError, Result};
use crate::guide::Guide;
use std::path::{Path, PathBuf};

#[cfg(feature = "cache")]
pub mod cache;
pub(crate) mod common_io;

/// The dataset compiled into the library.
static EMBEDDED_DATASET: &str = include_str!("../../data/portugal.json");

impl Guide {
    /// Directory holding the shipped dataset and map files.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "portugal.json"
    }

    /// Directory holding the per-region district GeoJSON files.
    pub fn default_map_dir() -> PathBuf {
        Self::default_data_dir().join("maps")
    }

    /// Parse the dataset that ships inside the library.
    ///
    /// No file system access, so this also works in the browser build.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let guide: Guide = serde_json::from_str(json)?;
        guide.validate()?;
        Ok(guide)
    }

    /// Load a dataset file.
    ///
    /// `.gz` files are decompressed when the `compact` feature is enabled.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let guide: Guide = serde_json::from_reader(reader)?;
        guide.validate()?;
        tracing::debug!(path = %path.display(), stats = ?guide.stats(), "dataset loaded");
        Ok(guide)
    }

    /// Structural checks that keep lookups well-defined.
    ///
    /// Region slugs must be unique within a country because they key the
    /// district and climate tables.
    fn validate(&self) -> Result<()> {
        for country in &self.countries {
            let mut seen = std::collections::HashSet::new();
            for region in &country.regions {
                if !seen.insert(region.slug.as_str()) {
                    return Err(GuideError::InvalidData(format!(
                        "duplicate region slug '{}' in {}",
                        region.slug, country.name
                    )));
                }
            }
        }
        for slug in self.districts.keys() {
            if self.region_by_slug(slug).is_none() {
                tracing::warn!(region = %slug, "district list has no matching region");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses() {
        let guide = Guide::embedded().unwrap();
        let stats = guide.stats();
        assert_eq!(stats.countries, 1);
        assert_eq!(stats.regions, 9);
        assert!(stats.districts >= 20);
    }

    #[test]
    fn duplicate_region_slugs_are_rejected() {
        let mut guide = Guide::embedded().unwrap();
        let dup = guide.countries[0].regions[0].clone();
        guide.countries[0].regions.push(dup);
        let json = serde_json::to_string(&guide).unwrap();
        assert!(matches!(
            Guide::from_json_str(&json),
            Err(GuideError::InvalidData(_))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let err = Guide::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GuideError::NotFound(_)));
    }

    #[cfg(all(feature = "json", feature = "compact"))]
    #[test]
    fn gzipped_dataset_loads_like_embedded() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let gz_path = dir.path().join("portugal.json.gz");
        let raw = std::fs::read(Guide::default_data_dir().join(Guide::default_dataset_filename()))
            .unwrap();
        let mut encoder =
            GzEncoder::new(std::fs::File::create(&gz_path).unwrap(), Compression::default());
        encoder.write_all(&raw).unwrap();
        encoder.finish().unwrap();

        let guide = Guide::load_from_path(&gz_path).unwrap();
        assert_eq!(guide.stats(), Guide::embedded().unwrap().stats());
    }
}
