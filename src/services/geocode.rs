use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::core::LocationTable;
use crate::models::School;

/// Errors that can occur when geocoding school names
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Geocoder returned error: {0}")]
    ApiError(String),

    #[error("Invalid coordinate in response: {0}")]
    InvalidResponse(String),

    #[error("Cache file error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("Cache JSON error: {0}")]
    CacheFormat(#[from] serde_json::Error),
}

/// A cached geocoding result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLocation {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

/// One Nominatim search hit; coordinates come back as strings
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Load a geocode cache file. A missing file is an empty cache.
pub fn load_cache(path: &Path) -> Result<BTreeMap<String, CachedLocation>, GeocodeError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Cache entries as location table supplement entries
pub fn cache_to_supplement(cache: &BTreeMap<String, CachedLocation>) -> HashMap<String, School> {
    cache
        .iter()
        .map(|(name, loc)| (name.clone(), School::new(name.clone(), loc.city.clone(), loc.lat, loc.lon)))
        .collect()
}

/// Nominatim geocoder with an on-disk cache
///
/// Network lookups run one at a time with a fixed delay after each hit.
pub struct Geocoder {
    endpoint: String,
    client: Client,
    cache: BTreeMap<String, CachedLocation>,
    cache_path: Option<PathBuf>,
    delay: Duration,
}

impl Geocoder {
    pub fn new(
        endpoint: String,
        user_agent: &str,
        cache_path: Option<PathBuf>,
        delay: Duration,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        let cache = match &cache_path {
            Some(path) => load_cache(path)?,
            None => BTreeMap::new(),
        };

        tracing::debug!("Geocode cache loaded with {} entries", cache.len());

        Ok(Self {
            endpoint,
            client,
            cache,
            cache_path,
            delay,
        })
    }

    pub fn cache(&self) -> &BTreeMap<String, CachedLocation> {
        &self.cache
    }

    fn save_cache(&self) -> Result<(), GeocodeError> {
        if let Some(path) = &self.cache_path {
            fs::write(path, serde_json::to_string_pretty(&self.cache)?)?;
        }
        Ok(())
    }

    fn search_url(&self, name: &str) -> String {
        let query = format!("{} High School, Oregon, USA", name);
        format!(
            "{}/search?q={}&format=json&limit=1",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(&query)
        )
    }

    /// Look a school up, from the cache first, then the network
    ///
    /// Every network lookup is followed by the configured delay, whatever
    /// its outcome.
    pub async fn resolve(&mut self, name: &str) -> Result<Option<CachedLocation>, GeocodeError> {
        if let Some(hit) = self.cache.get(name) {
            return Ok(Some(hit.clone()));
        }

        let result = self.search(name).await;
        tokio::time::sleep(self.delay).await;

        let Some(location) = result? else {
            return Ok(None);
        };

        self.cache.insert(name.to_string(), location.clone());
        self.save_cache()?;
        Ok(Some(location))
    }

    async fn search(&self, name: &str) -> Result<Option<CachedLocation>, GeocodeError> {
        let url = self.search_url(name);
        tracing::debug!("Geocoding {} via {}", name, url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GeocodeError::ApiError(format!(
                "Failed to geocode {}: {}",
                name,
                response.status()
            )));
        }

        let hits: Vec<SearchHit> = response.json().await?;
        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let lat: f64 = hit.lat.parse().map_err(|_| GeocodeError::InvalidResponse(hit.lat.clone()))?;
        let lon: f64 = hit.lon.parse().map_err(|_| GeocodeError::InvalidResponse(hit.lon.clone()))?;

        Ok(Some(CachedLocation {
            city: name.to_string(),
            lat,
            lon,
        }))
    }

    /// Geocode every team the location table cannot place
    ///
    /// Failures are logged and leave the team unresolved.
    pub async fn resolve_missing<'a>(
        &mut self,
        teams: impl IntoIterator<Item = &'a str>,
        table: &LocationTable,
    ) -> usize {
        let mut resolved = 0;

        for team in teams {
            if table.contains(team) {
                continue;
            }
            match self.resolve(team).await {
                Ok(Some(_)) => resolved += 1,
                Ok(None) => tracing::warn!("No geocoding result for {}", team),
                Err(e) => tracing::warn!("Geocoding error for {}: {}", team, e),
            }
        }

        tracing::info!("Geocoded {} previously unknown schools", resolved);
        resolved
    }

    /// Cache contents as location table supplement entries
    pub fn supplement(&self) -> HashMap<String, School> {
        cache_to_supplement(&self.cache)
    }
}
