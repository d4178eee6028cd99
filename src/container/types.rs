//! The container capability and its concrete variants
//!
//! A container carries a mass payload bounded by its rated capacity. The
//! behaviour is a trait so that further variants (refrigerated, hazardous)
//! can be added without touching vessels or the fleet. `BasicContainer` is
//! the only variant today.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::serial::SerialId;
use crate::error::{FleetError, Result};

/// Kind of container variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Basic,
}

impl ContainerKind {
    /// Short code used in human-readable listings.
    pub fn code(&self) -> char {
        match self {
            ContainerKind::Basic => 'B',
        }
    }
}

/// Read-only snapshot of a container, safe to hand to display layers.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerInfo {
    pub serial: SerialId,
    pub kind: ContainerKind,
    pub current_load_kg: f64,
    pub max_capacity_kg: f64,
    pub created_at: DateTime<Utc>,
}

/// A shippable container: a bounded mass payload behind load/unload.
pub trait Cargo: std::fmt::Debug {
    fn serial(&self) -> SerialId;
    fn kind(&self) -> ContainerKind;
    fn max_capacity_kg(&self) -> f64;
    fn current_load_kg(&self) -> f64;

    /// Add `amount_kg` of cargo. Fails with `Overfill` when the result
    /// would exceed the rated capacity; the load is unchanged on failure.
    fn load(&mut self, amount_kg: f64) -> Result<()>;

    /// Empty the container. Always succeeds; calling it twice has the same
    /// effect as calling it once.
    fn unload(&mut self);

    /// Snapshot for display. No side effects.
    fn describe(&self) -> ContainerInfo;
}

/// Boxed trait object held by vessel and fleet collections. A container
/// lives in exactly one of those collections at a time; ownership of the
/// box is what rules out double membership.
pub type BoxedCargo = Box<dyn Cargo>;

/// The standard general-purpose container.
#[derive(Debug)]
pub struct BasicContainer {
    serial: SerialId,
    max_capacity_kg: f64,
    current_load_kg: f64,
    created_at: DateTime<Utc>,
}

impl BasicContainer {
    /// Create an empty container. `max_capacity_kg` must be non-negative;
    /// the fleet validates inputs before constructing.
    pub fn new(serial: SerialId, max_capacity_kg: f64) -> Self {
        Self {
            serial,
            max_capacity_kg,
            current_load_kg: 0.0,
            created_at: Utc::now(),
        }
    }
}

impl Cargo for BasicContainer {
    fn serial(&self) -> SerialId {
        self.serial
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Basic
    }

    fn max_capacity_kg(&self) -> f64 {
        self.max_capacity_kg
    }

    fn current_load_kg(&self) -> f64 {
        self.current_load_kg
    }

    fn load(&mut self, amount_kg: f64) -> Result<()> {
        if !amount_kg.is_finite() || amount_kg < 0.0 {
            return Err(FleetError::InvalidArgument(format!(
                "cargo mass must be a non-negative number, got {}",
                amount_kg
            )));
        }
        if self.current_load_kg + amount_kg > self.max_capacity_kg {
            return Err(FleetError::Overfill {
                serial: self.serial,
                requested_kg: amount_kg,
                current_kg: self.current_load_kg,
                capacity_kg: self.max_capacity_kg,
            });
        }
        self.current_load_kg += amount_kg;
        Ok(())
    }

    fn unload(&mut self) {
        self.current_load_kg = 0.0;
    }

    fn describe(&self) -> ContainerInfo {
        ContainerInfo {
            serial: self.serial,
            kind: self.kind(),
            current_load_kg: self.current_load_kg,
            max_capacity_kg: self.max_capacity_kg,
            created_at: self.created_at,
        }
    }
}
