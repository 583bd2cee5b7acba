//! visit-route-planner core
//!
//! Turns an ordered list of visit stops into a drivable route: parse the
//! stops, optionally reorder them with a nearest-neighbor tour, resolve the
//! tour against a directions service and format the result for display.

pub mod traits;
pub mod error;
pub mod coordinates;
pub mod haversine;
pub mod tour;
pub mod polyline;
pub mod directions;
pub mod osrm;
pub mod resolver;
pub mod format;
pub mod session;
pub mod labels;
pub mod geocode;
pub mod markers;
pub mod config;
pub mod planner;

pub use coordinates::{Coordinate, StopList};
pub use error::{DirectionsError, RouteError};
pub use planner::VisitPlanner;
pub use resolver::{resolve_route, ResolvedRoute};
pub use session::{RouteSession, RouteState};
pub use tour::Tour;
