//! Test fixtures for visit-route-planner.
//!
//! Provides:
//! - Practice locations around Las Vegas / Henderson (from OpenStreetMap)
//! - Canned directions responses in the OSRM / Mapbox wire format
//! - Mock directions and place lookup providers

#![allow(dead_code)]

pub mod practice_locations;
pub mod providers;
pub mod responses;

pub use practice_locations::*;
pub use providers::*;
pub use responses::*;
