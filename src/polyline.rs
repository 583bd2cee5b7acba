//! Route geometry as a decoded coordinate sequence.
//!
//! Directions are requested with GeoJSON geometries, so the wire form is a
//! `LineString` with `[lng, lat]` positions. The map renderer consumes the
//! same shape, which is what [`Polyline`] serializes back to.

use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinate;

const LINE_STRING: &str = "LineString";

/// A route geometry as decoded coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "GeoJsonLineString", into = "GeoJsonLineString")]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeoJsonLineString {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

impl From<GeoJsonLineString> for Polyline {
    fn from(line: GeoJsonLineString) -> Self {
        Self::new(
            line.coordinates
                .into_iter()
                .map(|[lng, lat]| Coordinate::new(lng, lat))
                .collect(),
        )
    }
}

impl From<Polyline> for GeoJsonLineString {
    fn from(polyline: Polyline) -> Self {
        Self {
            kind: LINE_STRING.to_string(),
            coordinates: polyline.points.into_iter().map(|point| [point.lng, point.lat]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::DEFAULT_STOPS;

    #[test]
    fn test_keeps_route_points_in_order() {
        let points = DEFAULT_STOPS.to_vec();
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.points(), &points[..]);
        assert_eq!(polyline.into_points(), points);
    }

    #[test]
    fn test_default_has_no_geometry() {
        assert!(Polyline::default().is_empty());
    }

    #[test]
    fn test_reads_geojson_line_string() {
        let json = r#"{"type":"LineString","coordinates":[[76.1,30.2],[76.2,30.3]]}"#;
        let polyline: Polyline = serde_json::from_str(json).expect("valid line string");
        assert_eq!(
            polyline.points(),
            &[Coordinate::new(76.1, 30.2), Coordinate::new(76.2, 30.3)]
        );
    }

    #[test]
    fn test_writes_geojson_line_string() {
        let polyline = Polyline::new(vec![Coordinate::new(1.5, 2.5)]);
        let value = serde_json::to_value(&polyline).expect("serializable");
        assert_eq!(value["type"], "LineString");
        assert_eq!(value["coordinates"][0][0], 1.5);
        assert_eq!(value["coordinates"][0][1], 2.5);
    }
}
