//! Visit ordering.
//!
//! A tour is either the stops in the order they were supplied, or a greedy
//! nearest-neighbor reordering that keeps the first stop as the anchor.

use crate::coordinates::{Coordinate, StopList};
use crate::haversine::haversine_m;

/// Which order a [`Tour`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourOrder {
    Original,
    Optimized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    stops: Vec<Coordinate>,
    order: TourOrder,
}

impl Tour {
    pub fn original(stops: Vec<Coordinate>) -> Self {
        Self {
            stops,
            order: TourOrder::Original,
        }
    }

    pub fn optimized(stops: &[Coordinate]) -> Self {
        Self {
            stops: nearest_neighbor_tour(stops),
            order: TourOrder::Optimized,
        }
    }

    /// Optimize only when allowed and there is something to reorder: with two
    /// stops the anchor fixes the whole order.
    pub fn plan(stops: &StopList) -> Self {
        let tour = if stops.optimized && stops.len() > 2 {
            Self::optimized(&stops.coordinates)
        } else {
            Self::original(stops.coordinates.clone())
        };
        tracing::debug!(stops = tour.len(), order = ?tour.order, "planned tour");
        tour
    }

    pub fn stops(&self) -> &[Coordinate] {
        &self.stops
    }

    pub fn order(&self) -> TourOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Greedy nearest-neighbor ordering anchored at `stops[0]`.
///
/// From the current stop, always visit the closest remaining one. Ties go to
/// the stop that appears first in the remaining pool. O(n^2).
pub fn nearest_neighbor_tour(stops: &[Coordinate]) -> Vec<Coordinate> {
    let Some((&anchor, rest)) = stops.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![anchor];
    }

    let mut tour = Vec::with_capacity(stops.len());
    tour.push(anchor);

    let mut pool = rest.to_vec();
    let mut current = anchor;

    while !pool.is_empty() {
        let mut nearest = 0;
        let mut nearest_dist = f64::INFINITY;
        for (idx, candidate) in pool.iter().enumerate() {
            let dist = haversine_m(current, *candidate);
            if dist < nearest_dist {
                nearest = idx;
                nearest_dist = dist;
            }
        }

        current = pool.remove(nearest);
        tour.push(current);
    }

    tour
}
