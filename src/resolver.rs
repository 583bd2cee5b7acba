//! Route resolution: submit a tour, pick the fastest candidate, derive the
//! legs and steps the route panel shows.

use crate::coordinates::StopList;
use crate::directions::{BoundingBox, CandidateRoute, DirectionsRequest, DirectionsResponse};
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::tour::Tour;
use crate::traits::DirectionsProvider;

/// Padding, in pixels, applied when framing the map to the route bounds.
pub const FIT_BOUNDS_PADDING_PX: u32 = 50;

/// A single turn-by-turn instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub instruction: String,
    pub distance_m: f64,
}

/// Distance and duration of one stretch between consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegSummary {
    /// 1-based display ordinal, not a stop identifier.
    pub ordinal: usize,
    pub distance_m: f64,
    pub duration_s: f64,
}

/// Instruction to frame the map view to the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBounds {
    pub bbox: BoundingBox,
    pub padding_px: u32,
}

/// The selected route and everything derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub tour: Tour,
    pub distance_m: f64,
    pub duration_s: f64,
    pub geometry: Polyline,
    pub steps: Vec<StepView>,
    pub legs: Vec<LegSummary>,
    pub fit_bounds: Option<FitBounds>,
}

impl ResolvedRoute {
    fn from_candidate(tour: Tour, route: &CandidateRoute, bbox: Option<BoundingBox>) -> Self {
        let steps = route
            .legs
            .iter()
            .flat_map(|leg| leg.steps.iter())
            .map(|step| StepView {
                instruction: step.instruction(),
                distance_m: step.distance,
            })
            .collect();

        let legs = route
            .legs
            .iter()
            .enumerate()
            .map(|(idx, leg)| LegSummary {
                ordinal: idx + 1,
                distance_m: leg.distance,
                duration_s: leg.duration,
            })
            .collect();

        Self {
            tour,
            distance_m: route.distance,
            duration_s: route.duration,
            geometry: route.geometry.clone(),
            steps,
            legs,
            fit_bounds: bbox.map(|bbox| FitBounds {
                bbox,
                padding_px: FIT_BOUNDS_PADDING_PX,
            }),
        }
    }
}

/// Candidate with the smallest total duration; the first one wins ties.
pub fn select_fastest(routes: &[CandidateRoute]) -> Option<&CandidateRoute> {
    let mut best: Option<&CandidateRoute> = None;
    for route in routes {
        match best {
            Some(current) if route.duration >= current.duration => {}
            _ => best = Some(route),
        }
    }
    best
}

/// Plan the tour for `stops`, request directions for it and derive the
/// route view from the fastest candidate.
pub fn resolve_route<P>(provider: &P, stops: &StopList) -> Result<ResolvedRoute, RouteError>
where
    P: DirectionsProvider + ?Sized,
{
    if stops.len() < 2 {
        return Err(RouteError::InvalidInput { count: stops.len() });
    }

    let tour = Tour::plan(stops);
    let request = DirectionsRequest::for_tour(&tour);

    let response = provider.directions(&request).map_err(|err| {
        tracing::error!(error = %err, stops = tour.len(), "directions request failed");
        RouteError::Network(err)
    })?;

    route_from_response(tour, &response)
}

/// Derive the route view from a provider response for `tour`.
pub fn route_from_response(tour: Tour, response: &DirectionsResponse) -> Result<ResolvedRoute, RouteError> {
    let Some(fastest) = select_fastest(&response.routes) else {
        tracing::warn!(stops = tour.len(), "directions returned no routes");
        return Err(RouteError::NoRouteFound);
    };

    tracing::debug!(
        candidates = response.routes.len(),
        distance_m = fastest.distance,
        duration_s = fastest.duration,
        "selected fastest route"
    );

    Ok(ResolvedRoute::from_candidate(tour, fastest, response.bbox))
}
