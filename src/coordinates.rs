//! Stop coordinates and the parameter parsing that produces them.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// `lng,lat` as used in directions request paths.
    pub fn path_segment(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

/// Stops used when the parameter source supplies none.
pub const DEFAULT_STOPS: [Coordinate; 4] = [
    Coordinate::new(76.7794, 30.7333),
    Coordinate::new(76.7179, 30.7046),
    Coordinate::new(76.8606, 30.6942),
    Coordinate::new(76.8173, 30.6435),
];

/// Query parameter carrying the `lng,lat;lng,lat` stop list.
pub const COORDINATES_PARAM: &str = "coordinates";

/// Query parameter controlling whether stops may be reordered.
pub const OPTIMIZED_PARAM: &str = "optimized";

/// Ordered stops plus whether reordering is permitted.
#[derive(Debug, Clone, PartialEq)]
pub struct StopList {
    pub coordinates: Vec<Coordinate>,
    pub optimized: bool,
}

impl StopList {
    pub fn from_params(coordinates: Option<&str>, optimized: Option<&str>) -> Self {
        Self {
            coordinates: parse_coordinates(coordinates),
            optimized: parse_optimized(optimized),
        }
    }

    /// Read the stop list from a URL query string such as
    /// `coordinates=76.1,30.2;76.2,30.3&optimized=false`.
    pub fn from_query(query: &str) -> Self {
        let mut coordinates: Option<Cow<'_, str>> = None;
        let mut optimized: Option<Cow<'_, str>> = None;

        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                COORDINATES_PARAM => coordinates = Some(value),
                OPTIMIZED_PARAM => optimized = Some(value),
                _ => {}
            }
        }

        Self::from_params(coordinates.as_deref(), optimized.as_deref())
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Parse a `lng,lat;lng,lat` list.
///
/// Malformed pairs are dropped. An empty result falls back to
/// [`DEFAULT_STOPS`]; a single stop is duplicated so a trivial route can
/// still be requested.
pub fn parse_coordinates(raw: Option<&str>) -> Vec<Coordinate> {
    let mut coordinates: Vec<Coordinate> = raw
        .unwrap_or_default()
        .split(';')
        .filter_map(parse_pair)
        .collect();

    match coordinates.len() {
        0 => DEFAULT_STOPS.to_vec(),
        1 => {
            coordinates.push(coordinates[0]);
            coordinates
        }
        _ => coordinates,
    }
}

/// Anything but the literal `"false"` enables optimization.
pub fn parse_optimized(raw: Option<&str>) -> bool {
    raw != Some("false")
}

fn parse_pair(pair: &str) -> Option<Coordinate> {
    let mut parts = pair.split(',');
    let lng = parse_component(parts.next()?)?;
    let lat = parse_component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate::new(lng, lat))
}

fn parse_component(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
