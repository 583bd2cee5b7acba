//! Canned directions responses.

use visit_route_planner::directions::{
    CandidateRoute, DirectionsResponse, Maneuver, RouteLeg, RouteStep,
};

/// Candidate route with one leg per `legs` entry, each carrying a single
/// step named after its position.
pub fn candidate(duration: f64, distance: f64, legs: usize) -> CandidateRoute {
    let leg_count = legs.max(1) as f64;
    CandidateRoute {
        distance,
        duration,
        legs: (0..legs)
            .map(|idx| RouteLeg {
                distance: distance / leg_count,
                duration: duration / leg_count,
                steps: vec![RouteStep {
                    distance: distance / leg_count,
                    maneuver: Maneuver {
                        instruction: Some(format!("Drive to stop {}", idx + 1)),
                        ..Maneuver::default()
                    },
                    ..RouteStep::default()
                }],
                ..RouteLeg::default()
            })
            .collect(),
        ..CandidateRoute::default()
    }
}

pub fn response_with(routes: Vec<CandidateRoute>) -> DirectionsResponse {
    DirectionsResponse {
        code: Some("Ok".to_string()),
        routes,
        ..DirectionsResponse::default()
    }
}

/// Two alternatives between two stops, the second one faster.
pub const TWO_ALTERNATIVES_JSON: &str = r#"{
    "code": "Ok",
    "routes": [
        {
            "distance": 12000.0,
            "duration": 900.0,
            "geometry": {"type": "LineString", "coordinates": [[-115.289, 36.1699], [-115.245, 36.108]]},
            "legs": [{
                "distance": 12000.0,
                "duration": 900.0,
                "summary": "W Charleston Blvd",
                "steps": [
                    {"distance": 11000.0, "duration": 850.0, "name": "W Charleston Blvd",
                     "maneuver": {"type": "depart", "modifier": "left"}},
                    {"distance": 1000.0, "duration": 50.0, "name": "",
                     "maneuver": {"type": "arrive"}}
                ]
            }]
        },
        {
            "distance": 14500.0,
            "duration": 780.0,
            "geometry": {"type": "LineString", "coordinates": [[-115.289, 36.1699], [-115.26, 36.14], [-115.245, 36.108]]},
            "legs": [{
                "distance": 14500.0,
                "duration": 780.0,
                "summary": "I-215",
                "steps": [
                    {"distance": 2500.0, "duration": 120.0, "name": "Town Center Dr",
                     "maneuver": {"type": "depart", "instruction": "Head south on Town Center Dr"}},
                    {"distance": 12000.0, "duration": 660.0, "name": "I-215",
                     "maneuver": {"type": "merge", "modifier": "slight right", "instruction": "Merge onto I-215"}}
                ]
            }]
        }
    ],
    "bbox": [-115.289, 36.108, -115.245, 36.1699]
}"#;

pub const NO_ROUTE_JSON: &str = r#"{"code": "NoRoute", "message": "Impossible route between points", "routes": []}"#;

pub const INVALID_QUERY_JSON: &str = r#"{"code": "InvalidQuery", "message": "Query string malformed close to position 28"}"#;
