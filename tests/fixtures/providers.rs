//! Mock providers.

use std::collections::HashMap;
use std::sync::Mutex;

use visit_route_planner::directions::{DirectionsRequest, DirectionsResponse};
use visit_route_planner::traits::{DirectionsProvider, PlaceLookup};
use visit_route_planner::{Coordinate, DirectionsError};

/// Directions provider that records requests and replies with a fixed
/// response or a service error.
pub struct MockDirections {
    reply: Result<DirectionsResponse, (String, String)>,
    requests: Mutex<Vec<DirectionsRequest>>,
}

impl MockDirections {
    pub fn returning(response: DirectionsResponse) -> Self {
        Self {
            reply: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(code: &str, message: &str) -> Self {
        Self {
            reply: Err((code.to_string(), message.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl DirectionsProvider for MockDirections {
    fn directions(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, DirectionsError> {
        self.requests.lock().expect("requests lock").push(request.clone());
        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err((code, message)) => Err(DirectionsError::Service {
                code: code.clone(),
                message: message.clone(),
            }),
        }
    }
}

/// Place lookup answering from a fixed table keyed by `lng,lat`.
#[derive(Default)]
pub struct MockPlaces {
    names: HashMap<String, String>,
}

impl MockPlaces {
    pub fn with(mut self, at: Coordinate, name: &str) -> Self {
        self.names.insert(at.path_segment(), name.to_string());
        self
    }
}

impl PlaceLookup for MockPlaces {
    fn place_name(&self, at: Coordinate) -> Option<String> {
        self.names.get(&at.path_segment()).cloned()
    }
}
