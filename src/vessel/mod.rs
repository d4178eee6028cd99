//! Vessels: bounded, ordered collections of containers
//!
//! A vessel is capped by a maximum container count and a maximum aggregate
//! cargo mass; both are immutable after construction and re-validated
//! against live container loads on every admission.

mod types;

pub use types::{Vessel, VesselInfo, KG_PER_TON};
