// crates/guide-core/src/loader/cache.rs
#![cfg(feature = "cache")]

use super::common_io;
use crate::error::{GuideError, Result};
use crate::guide::Guide;

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";

#[derive(Debug, Clone, Copy)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    fn active() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

impl Guide {
    /// **Smart Load:** uses the binary cache when it is fresh, otherwise
    /// parses the source and refreshes the cache.
    ///
    /// Cache problems never fail the load: a stale or unreadable cache
    /// falls back to the source, a failed cache write is only logged.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        if is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(guide) => return Ok(guide),
                Err(err) => {
                    tracing::warn!(cache = %cache_path.display(), %err, "ignoring unreadable cache")
                }
            }
        }

        let guide = Self::load_from_path(path)?;
        if let Err(err) = write_generic(&cache_path, &guide, CompressionMode::active()) {
            tracing::warn!(cache = %cache_path.display(), %err, "could not write cache");
        }
        Ok(guide)
    }

    /// Read a snapshot written by [`Guide::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GuideError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
        })?;
        let mut reader: Box<dyn Read> = match CompressionMode::active() {
            #[cfg(feature = "compact")]
            CompressionMode::Gzip => Box::new(GzDecoder::new(std::io::BufReader::new(file))),
            _ => Box::new(std::io::BufReader::new(file)),
        };
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(bincode::deserialize(&data)?)
    }

    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), self, CompressionMode::active())
    }
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone: the snapshot is all we have.
        Err(_) => true,
    }
}

/// Writes any serializable value to disk as bincode.
fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GuideError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    bincode::serialize_into(&mut encoder, value)?;
    encoder.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_cached_writes_and_reuses_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("portugal.json");
        fs::copy(Guide::default_data_dir().join("portugal.json"), &source).unwrap();

        let first = Guide::load_cached(&source).unwrap();
        let cache_path = common_io::get_cache_path(&source, CACHE_SUFFIX);
        assert!(cache_path.exists());

        let second = Guide::load_cached(&source).unwrap();
        assert_eq!(first.stats(), second.stats());
    }

    #[test]
    fn corrupt_cache_falls_back_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("portugal.json");
        fs::copy(Guide::default_data_dir().join("portugal.json"), &source).unwrap();
        let cache_path = common_io::get_cache_path(&source, CACHE_SUFFIX);
        fs::write(&cache_path, b"not a snapshot").unwrap();

        let guide = Guide::load_cached(&source).unwrap();
        assert_eq!(guide.stats().regions, 9);
    }
}
