//! Planner configuration.
//!
//! Every field has a default, so a host can deserialize a partial document
//! (JSON, TOML, ...) and only override what it needs.

use serde::Deserialize;

use crate::geocode::GeocoderConfig;
use crate::osrm::OsrmConfig;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub directions: OsrmConfig,
    pub geocoder: GeocoderConfig,
}

impl PlannerConfig {
    /// Mapbox directions and geocoding sharing one access token.
    pub fn mapbox(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        Self {
            directions: OsrmConfig::mapbox(access_token.clone()),
            geocoder: GeocoderConfig {
                access_token: Some(access_token),
                ..GeocoderConfig::default()
            },
        }
    }
}
