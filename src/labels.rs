//! Stop labels and marker styling hints.

use rayon::prelude::*;

use crate::coordinates::Coordinate;
use crate::traits::PlaceLookup;

/// Position of a stop within the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRole {
    Start,
    Waypoint,
    Destination,
}

impl StopRole {
    pub fn for_index(index: usize, count: usize) -> Self {
        if index == 0 {
            StopRole::Start
        } else if index + 1 == count {
            StopRole::Destination
        } else {
            StopRole::Waypoint
        }
    }

    /// Marker fill colour for the renderer.
    pub fn marker_color(&self) -> &'static str {
        match self {
            StopRole::Start => "#22c55e",
            StopRole::Waypoint => "#3b82f6",
            StopRole::Destination => "#ef4444",
        }
    }
}

/// Positional label used when no place name is available.
pub fn fallback_label(index: usize, count: usize) -> String {
    match StopRole::for_index(index, count) {
        StopRole::Start => "Start".to_string(),
        StopRole::Destination => "Destination".to_string(),
        StopRole::Waypoint => format!("Stop {}", index),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopLabel {
    pub index: usize,
    pub coordinate: Coordinate,
    pub role: StopRole,
    pub text: String,
}

/// Label every stop, looking place names up in parallel.
///
/// Output order matches `stops`. Missing or blank names fall back to
/// [`fallback_label`].
pub fn resolve_labels<L>(lookup: &L, stops: &[Coordinate]) -> Vec<StopLabel>
where
    L: PlaceLookup + Sync + ?Sized,
{
    let count = stops.len();
    stops
        .par_iter()
        .enumerate()
        .map(|(index, &coordinate)| {
            let text = lookup
                .place_name(coordinate)
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| fallback_label(index, count));

            StopLabel {
                index,
                coordinate,
                role: StopRole::for_index(index, count),
                text,
            }
        })
        .collect()
}
