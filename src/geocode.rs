//! Reverse geocoding for stop labels.
//!
//! Mapbox-style endpoint: `{base_url}/{lng},{lat}.json`, answering with a
//! GeoJSON feature collection whose first feature carries `place_name`.
//! Every failure is logged at debug level and reported as `None`.

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::coordinates::Coordinate;
use crate::error::GeocodeError;
use crate::traits::PlaceLookup;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub access_token: Option<String>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com/geocoding/v5/mapbox.places".to_string(),
            timeout_secs: 5,
            access_token: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    config: GeocoderConfig,
    client: reqwest::blocking::Client,
}

impl ReverseGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn lookup_url(&self, at: Coordinate) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!(
            "{}/{}.json",
            self.config.base_url.trim_end_matches('/'),
            at.path_segment()
        ))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", "1");
            if let Some(token) = &self.config.access_token {
                query.append_pair("access_token", token);
            }
        }

        Ok(url)
    }

    fn fetch(&self, at: Coordinate) -> Result<Option<String>, GeocodeError> {
        let url = self.lookup_url(at)?;
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<FeatureCollection>())?;

        Ok(body.features.into_iter().next().map(|feature| feature.place_name))
    }
}

impl PlaceLookup for ReverseGeocoder {
    fn place_name(&self, at: Coordinate) -> Option<String> {
        match self.fetch(at) {
            Ok(name) => name,
            Err(err) => {
                tracing::debug!(lng = at.lng, lat = at.lat, error = %err, "reverse geocoding failed");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    place_name: String,
}
