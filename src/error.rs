//! Error types for directions lookups and route resolution.

use thiserror::Error;

/// Failures at the directions provider seam.
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// The request URL could not be built from the configured base URL.
    #[error("failed to build directions URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport failure, timeout or undecodable body.
    #[error("directions request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status without a recognised service code.
    #[error("directions service responded with HTTP {status}")]
    Status { status: u16 },

    /// The service answered but reported an error code.
    #[error("directions service returned {code}: {message}")]
    Service { code: String, message: String },
}

/// Failures looking up a place name. Never surfaced past [`PlaceLookup`].
///
/// [`PlaceLookup`]: crate::traits::PlaceLookup
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("failed to build geocoding URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Outcome of a failed route resolution.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Fewer than two usable coordinates.
    #[error("at least 2 coordinates are required to plan a route, got {count}")]
    InvalidInput { count: usize },

    /// The provider answered with no candidate routes.
    #[error("no route found between the selected stops")]
    NoRouteFound,

    /// The request itself failed.
    #[error(transparent)]
    Network(#[from] DirectionsError),
}

impl RouteError {
    /// Message to show the user, if any.
    ///
    /// Network failures degrade silently and have no message.
    pub fn user_message(&self) -> Option<String> {
        match self {
            RouteError::InvalidInput { .. } | RouteError::NoRouteFound => Some(self.to_string()),
            RouteError::Network(_) => None,
        }
    }

    /// Whether the error blocks rendering the route panel entirely.
    pub fn is_blocking(&self) -> bool {
        matches!(self, RouteError::InvalidInput { .. })
    }
}
