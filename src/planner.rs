//! Planner facade tying stops, directions and labels together.

use crate::config::PlannerConfig;
use crate::coordinates::StopList;
use crate::geocode::ReverseGeocoder;
use crate::labels::{resolve_labels, StopLabel};
use crate::osrm::OsrmClient;
use crate::resolver::resolve_route;
use crate::session::RouteSession;
use crate::tour::Tour;
use crate::traits::{DirectionsProvider, PlaceLookup};

#[derive(Debug, Clone)]
pub struct VisitPlanner<D, L> {
    directions: D,
    places: L,
}

impl VisitPlanner<OsrmClient, ReverseGeocoder> {
    pub fn from_config(config: &PlannerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            OsrmClient::new(config.directions.clone())?,
            ReverseGeocoder::new(config.geocoder.clone())?,
        ))
    }
}

impl<D, L> VisitPlanner<D, L>
where
    D: DirectionsProvider,
    L: PlaceLookup + Sync,
{
    pub fn new(directions: D, places: L) -> Self {
        Self { directions, places }
    }

    /// Resolve `stops` into `session`.
    ///
    /// Returns whether the result was applied; `false` means a newer
    /// refresh began on the same session while this one was in flight.
    pub fn refresh(&self, session: &RouteSession, stops: &StopList) -> bool {
        let ticket = session.begin();
        let result = resolve_route(&self.directions, stops);
        session.finish(ticket, result)
    }

    /// Labels for the stops in tour order.
    pub fn labels(&self, tour: &Tour) -> Vec<StopLabel> {
        resolve_labels(&self.places, tour.stops())
    }
}
