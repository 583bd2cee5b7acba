//! Per-session route state.
//!
//! Each resolution runs `Idle -> Loading -> Ready | Failed`. A new
//! resolution takes a fresh [`Ticket`]; results carrying an older ticket are
//! dropped so a slow response never overwrites a newer one.
//!
//! A network failure is not a state of its own: the session goes back to
//! whatever was shown before the resolution began.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::RouteError;
use crate::format::{format_distance, format_duration};
use crate::resolver::ResolvedRoute;

#[derive(Debug, Default)]
pub enum RouteState {
    #[default]
    Idle,
    Loading,
    Ready(ResolvedRoute),
    Failed(RouteError),
}

impl RouteState {
    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            RouteState::Ready(route) => Some(route),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RouteError> {
        match self {
            RouteState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RouteState::Loading)
    }

    /// Totals to display; a missing route shows zeros.
    pub fn totals(&self) -> Option<(f64, f64)> {
        match self {
            RouteState::Ready(route) => Some((route.distance_m, route.duration_s)),
            RouteState::Failed(RouteError::NoRouteFound) => Some((0.0, 0.0)),
            _ => None,
        }
    }

    /// Formatted view of the current state, if there is anything to show.
    pub fn panel(&self) -> Option<RoutePanel> {
        match self {
            RouteState::Idle | RouteState::Loading => None,
            RouteState::Ready(route) => Some(RoutePanel::for_route(route)),
            RouteState::Failed(err) if err.is_blocking() => Some(RoutePanel::blocked(err)),
            RouteState::Failed(RouteError::NoRouteFound) => Some(RoutePanel::no_route()),
            RouteState::Failed(_) => None,
        }
    }
}

/// One line of the per-leg breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegLine {
    pub title: String,
    pub distance: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLine {
    pub instruction: String,
    pub distance: String,
}

/// Display strings for the route panel. Distances are in miles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutePanel {
    /// `None` when the panel has no figures to show.
    pub distance: Option<String>,
    pub duration: Option<String>,
    pub legs: Vec<LegLine>,
    pub steps: Vec<StepLine>,
    pub message: Option<String>,
}

impl RoutePanel {
    fn for_route(route: &ResolvedRoute) -> Self {
        Self {
            distance: Some(format_distance(route.distance_m)),
            duration: Some(format_duration(route.duration_s)),
            legs: route
                .legs
                .iter()
                .map(|leg| LegLine {
                    title: format!("Stretch {} \u{2192} {}", leg.ordinal, leg.ordinal + 1),
                    distance: format_distance(leg.distance_m),
                    duration: format_duration(leg.duration_s),
                })
                .collect(),
            steps: route
                .steps
                .iter()
                .map(|step| StepLine {
                    instruction: step.instruction.clone(),
                    distance: format_distance(step.distance_m),
                })
                .collect(),
            message: None,
        }
    }

    fn no_route() -> Self {
        Self {
            distance: Some(format_distance(0.0)),
            duration: Some(format_duration(0.0)),
            message: RouteError::NoRouteFound.user_message(),
            ..Self::default()
        }
    }

    fn blocked(err: &RouteError) -> Self {
        Self {
            message: err.user_message(),
            ..Self::default()
        }
    }
}

/// Identifies one resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct SessionInner {
    generation: u64,
    state: RouteState,
    /// State shown before the current resolution began.
    previous: RouteState,
}

/// Owns the route state for one planner session.
#[derive(Debug, Default)]
pub struct RouteSession {
    inner: Mutex<SessionInner>,
}

impl RouteSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a resolution, superseding any still in flight.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.generation += 1;
        let shown = std::mem::replace(&mut inner.state, RouteState::Loading);
        if !shown.is_loading() {
            inner.previous = shown;
        }
        Ticket(inner.generation)
    }

    /// Apply a result. Returns `false` if a newer resolution has begun since
    /// `ticket` was issued, in which case the result is dropped.
    pub fn finish(&self, ticket: Ticket, result: Result<ResolvedRoute, RouteError>) -> bool {
        let mut inner = self.lock();
        if ticket.0 != inner.generation {
            tracing::debug!(
                stale = ticket.0,
                current = inner.generation,
                "dropping superseded route result"
            );
            return false;
        }

        let previous = std::mem::take(&mut inner.previous);
        inner.state = match result {
            Ok(route) => RouteState::Ready(route),
            Err(RouteError::Network(err)) => {
                tracing::debug!(error = %err, "keeping previous route state after network failure");
                previous
            }
            Err(err) => RouteState::Failed(err),
        };
        true
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Run `f` against the current state.
    pub fn with_state<T>(&self, f: impl FnOnce(&RouteState) -> T) -> T {
        f(&self.lock().state)
    }

    pub fn panel(&self) -> Option<RoutePanel> {
        self.with_state(RouteState::panel)
    }
}
