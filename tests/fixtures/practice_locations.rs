//! Practice locations for realistic visit routes.
//!
//! An office and the practices a field rep calls on in one visit day.

use visit_route_planner::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lng, self.lat)
    }
}

pub const OFFICE: Location = Location::new("Orthodontic office, Summerlin", 36.1699, -115.2890);

pub const PRACTICES: &[Location] = &[
    Location::new("Family dental, Spring Valley", 36.1080, -115.2450),
    Location::new("Pediatric dentistry, Henderson", 36.0395, -115.0457),
    Location::new("General dentistry, Downtown", 36.1716, -115.1391),
    Location::new("Dental group, North Las Vegas", 36.1989, -115.1175),
    Location::new("Smile studio, Green Valley", 36.0331, -115.0846),
    Location::new("Dental care, Paradise", 36.0972, -115.1467),
];

/// Office first, then the practices in the order a coordinator entered them.
pub fn visit_day() -> Vec<Coordinate> {
    std::iter::once(OFFICE.coordinate())
        .chain(PRACTICES.iter().map(Location::coordinate))
        .collect()
}

/// `lng,lat;lng,lat` as carried by the `coordinates` query parameter.
pub fn visit_day_param() -> String {
    visit_day()
        .iter()
        .map(Coordinate::path_segment)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_day_stays_in_the_valley() {
        for coordinate in visit_day() {
            assert!(coordinate.lat > 35.9 && coordinate.lat < 36.4);
            assert!(coordinate.lng > -115.4 && coordinate.lng < -114.9);
        }
    }
}
