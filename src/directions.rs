//! Directions request and response types.
//!
//! The response shape is the one shared by OSRM's Route service and the
//! Mapbox Directions API: a `code`, a list of candidate `routes`, each with
//! legs and steps. Mapbox fills in `maneuver.instruction`; plain OSRM does
//! not, so [`RouteStep::instruction`] synthesizes one when it is missing.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

use crate::coordinates::Coordinate;
use crate::polyline::Polyline;
use crate::tour::Tour;

/// An ordered coordinate path plus the options sent with it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub coordinates: Vec<Coordinate>,
    pub steps: bool,
    pub alternatives: bool,
}

impl DirectionsRequest {
    /// Turn-by-turn steps, alternatives, full GeoJSON overview.
    pub fn for_tour(tour: &Tour) -> Self {
        Self {
            coordinates: tour.stops().to_vec(),
            steps: true,
            alternatives: true,
        }
    }

    /// Coordinates in `lng,lat;lng,lat` path syntax.
    pub fn path(&self) -> String {
        self.coordinates
            .iter()
            .map(Coordinate::path_segment)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Query options, excluding any access credential.
    ///
    /// Geometry is always the full overview as GeoJSON, the shape
    /// [`Polyline`] reads.
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("steps", bool_param(self.steps)),
            ("alternatives", bool_param(self.alternatives)),
            ("overview", "full"),
            ("geometries", "geojson"),
        ]
    }
}

fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Response status signalling success.
pub const CODE_OK: &str = "Ok";

/// Response status for "no route between these points".
pub const CODE_NO_ROUTE: &str = "NoRoute";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<CandidateRoute>,
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}

impl DirectionsResponse {
    /// Error status reported by the service, if any.
    ///
    /// `NoRoute` is not an error here; it means an empty candidate list.
    pub fn service_error(&self) -> Option<(&str, &str)> {
        match self.code.as_deref() {
            None | Some(CODE_OK) | Some(CODE_NO_ROUTE) => None,
            Some(code) => Some((code, self.message.as_deref().unwrap_or_default())),
        }
    }
}

/// One candidate route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateRoute {
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    #[serde(default)]
    pub geometry: Polyline,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

/// The part of a route between two consecutive stops.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteLeg {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteStep {
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub maneuver: Maneuver,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Maneuver {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
}

impl RouteStep {
    /// Human-readable instruction for this step.
    pub fn instruction(&self) -> String {
        if let Some(text) = self.maneuver.instruction.as_deref().filter(|text| !text.trim().is_empty()) {
            return text.to_string();
        }

        let action = match (self.maneuver.kind.as_str(), self.maneuver.modifier.as_deref()) {
            ("depart", _) => "Depart".to_string(),
            ("arrive", _) => "Arrive at destination".to_string(),
            ("roundabout" | "rotary", _) => "Enter the roundabout".to_string(),
            (_, Some("straight")) => "Continue straight".to_string(),
            (_, Some("uturn")) => "Make a U-turn".to_string(),
            (_, Some(modifier)) => format!("Turn {}", modifier),
            ("", None) => "Continue".to_string(),
            (kind, None) => capitalize(&kind.replace('_', " ")),
        };

        if self.name.is_empty() || self.maneuver.kind == "arrive" {
            action
        } else {
            format!("{} onto {}", action, self.name)
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `[min_lng, min_lat, max_lng, max_lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 4]")]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl From<[f64; 4]> for BoundingBox {
    fn from([min_lng, min_lat, max_lng, max_lat]: [f64; 4]) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }
}
