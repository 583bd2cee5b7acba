//! OSRM-compatible HTTP adapter for directions.
//!
//! Works against an OSRM `route/v1` server or the Mapbox Directions API,
//! which shares the request and response shape.

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::directions::{DirectionsRequest, DirectionsResponse, CODE_NO_ROUTE};
use crate::error::DirectionsError;
use crate::traits::DirectionsProvider;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    /// Service path segment, `route/v1` for OSRM or `directions/v5` for Mapbox.
    pub service: String,
    pub profile: String,
    pub timeout_secs: u64,
    /// Sent as the `access_token` query parameter when set.
    pub access_token: Option<String>,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            service: "route/v1".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
            access_token: None,
        }
    }
}

impl OsrmConfig {
    /// Local or self-hosted OSRM server.
    pub fn osrm(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Mapbox Directions API with the driving profile.
    pub fn mapbox(access_token: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.mapbox.com".to_string(),
            service: "directions/v5".to_string(),
            profile: "mapbox/driving".to_string(),
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    /// `{base_url}/{service}/{profile}/{path}?{options}`.
    pub fn route_url(&self, request: &DirectionsRequest) -> Result<Url, DirectionsError> {
        let base = format!(
            "{}/{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.service.trim_matches('/'),
            self.config.profile.trim_matches('/'),
            request.path()
        );
        let mut url = Url::parse(&base)?;

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in request.query_pairs() {
                query.append_pair(key, value);
            }
            if let Some(token) = &self.config.access_token {
                query.append_pair("access_token", token);
            }
        }

        Ok(url)
    }
}

impl DirectionsProvider for OsrmClient {
    fn directions(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, DirectionsError> {
        let url = self.route_url(request)?;
        tracing::debug!(
            stops = request.coordinates.len(),
            profile = %self.config.profile,
            "requesting directions"
        );

        let response = self.client.get(url).send()?;
        let status = response.status();
        // OSRM answers NoRoute and InvalidQuery with a 400 and a JSON body,
        // so the body is read before the status is judged.
        let body = response.json::<DirectionsResponse>()?;

        if let Some((code, message)) = body.service_error() {
            return Err(DirectionsError::Service {
                code: code.to_string(),
                message: message.to_string(),
            });
        }
        if !status.is_success() && body.code.as_deref() != Some(CODE_NO_ROUTE) {
            return Err(DirectionsError::Status {
                status: status.as_u16(),
            });
        }

        Ok(body)
    }
}
