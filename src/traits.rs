//! Seams to the external services the planner depends on.
//!
//! Concrete HTTP adapters live in [`crate::osrm`] and [`crate::geocode`];
//! tests and host applications can supply their own implementations.

use crate::coordinates::Coordinate;
use crate::directions::{DirectionsRequest, DirectionsResponse};
use crate::error::DirectionsError;

/// Resolves an ordered coordinate path into candidate drivable routes.
pub trait DirectionsProvider {
    fn directions(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, DirectionsError>;
}

/// Best-effort reverse geocoding used for stop labels.
///
/// Implementations return `None` for any failure; callers fall back to a
/// positional label.
pub trait PlaceLookup {
    fn place_name(&self, at: Coordinate) -> Option<String>;
}

impl<T: DirectionsProvider + ?Sized> DirectionsProvider for &T {
    fn directions(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, DirectionsError> {
        (**self).directions(request)
    }
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for &T {
    fn place_name(&self, at: Coordinate) -> Option<String> {
        (**self).place_name(at)
    }
}

/// Lookup that never resolves, leaving every stop on its positional label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlaceLookup;

impl PlaceLookup for NoPlaceLookup {
    fn place_name(&self, _at: Coordinate) -> Option<String> {
        None
    }
}
