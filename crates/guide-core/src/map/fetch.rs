// crates/guide-core/src/map/fetch.rs
use super::geojson::FeatureCollection;
use crate::error::Result;
use crate::loader::common_io;
use std::collections::HashMap;
use std::path::PathBuf;

/// `north-region` -> `north-region-districts.json`
pub fn district_map_file(region_slug: &str) -> String {
    format!("{region_slug}-districts.json")
}

/// `portugal` -> `portugal-regions.json`
pub fn region_map_file(country_slug: &str) -> String {
    format!("{country_slug}-regions.json")
}

/// Source of map files.
pub trait MapFetcher {
    fn fetch(&self, file_name: &str) -> Result<FeatureCollection>;
}

impl<T: MapFetcher + ?Sized> MapFetcher for Box<T> {
    fn fetch(&self, file_name: &str) -> Result<FeatureCollection> {
        (**self).fetch(file_name)
    }
}

/// Reads map files from a local directory. `.gz` files are accepted when
/// the `compact` feature is on.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    dir: PathBuf,
}

impl FileFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl MapFetcher for FileFetcher {
    fn fetch(&self, file_name: &str) -> Result<FeatureCollection> {
        let path = self.dir.join(file_name);
        let reader = common_io::open_stream(&path)?;
        let fc: FeatureCollection = serde_json::from_reader(reader)?;
        tracing::debug!(path = %path.display(), features = fc.len(), "map file read");
        Ok(fc)
    }
}

/// Fetches map files over HTTP from `<base_url>/<file_name>`.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("guide-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| crate::error::GuideError::Http(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url, file_name)
    }
}

#[cfg(feature = "fetch")]
impl MapFetcher for HttpFetcher {
    fn fetch(&self, file_name: &str) -> Result<FeatureCollection> {
        use crate::error::GuideError;

        let url = self.url_for(file_name);
        tracing::debug!(%url, "fetching map file");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| GuideError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GuideError::Http(format!(
                "{url} returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| GuideError::Http(e.to_string()))?;
        FeatureCollection::from_json_str(&body)
    }
}

/// Map files fetched so far, keyed by file name.
///
/// Owned by whoever drives the map. A file that failed once is remembered
/// as missing and is not requested again for the lifetime of the cache.
pub struct MapCache<F> {
    fetcher: F,
    entries: HashMap<String, Option<FeatureCollection>>,
}

impl<F: MapFetcher> MapCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            entries: HashMap::new(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// District boundaries for a region, or `None` if the file is missing.
    pub fn district_map(&mut self, region_slug: &str) -> Option<&FeatureCollection> {
        self.get_or_fetch(district_map_file(region_slug), |fc| fc)
    }

    /// Region outlines for a country with the island hover boxes appended.
    pub fn region_map(&mut self, country_slug: &str) -> Option<&FeatureCollection> {
        self.get_or_fetch(region_map_file(country_slug), FeatureCollection::with_island_boxes)
    }

    /// Whether a file has been attempted, successfully or not.
    pub fn is_cached(&self, file_name: &str) -> bool {
        self.entries.contains_key(file_name)
    }

    pub fn has_failed(&self, file_name: &str) -> bool {
        matches!(self.entries.get(file_name), Some(None))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_or_fetch(
        &mut self,
        file_name: String,
        prepare: fn(FeatureCollection) -> FeatureCollection,
    ) -> Option<&FeatureCollection> {
        let fetcher = &self.fetcher;
        self.entries
            .entry(file_name)
            .or_insert_with_key(|file| match fetcher.fetch(file) {
                Ok(fc) => Some(prepare(fc)),
                Err(e) => {
                    tracing::warn!(file = %file, error = %e, "map file unavailable");
                    None
                }
            })
            .as_ref()
    }
}
