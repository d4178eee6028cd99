//! Vessel entity
//!
//! A vessel owns the containers currently aboard it. Moving the boxed
//! container in and out of `containers` is what guarantees a container can
//! never be aboard two vessels at once; there is no separate membership
//! flag to keep in sync.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::container::{BoxedCargo, Cargo, ContainerInfo, SerialId};
use crate::error::{FleetError, Result};

/// Kilograms per metric ton. Vessel weight limits are entered in tons but
/// stored and checked in kilograms.
pub const KG_PER_TON: f64 = 1000.0;

/// Read-only snapshot of a vessel and everything aboard, safe to hand to
/// display layers.
#[derive(Debug, Clone, Serialize)]
pub struct VesselInfo {
    pub name: String,
    pub cruise_speed_knots: f64,
    pub max_containers: usize,
    pub max_total_mass_kg: f64,
    pub total_mass_kg: f64,
    pub containers: Vec<ContainerInfo>,
    pub created_at: DateTime<Utc>,
}

/// A transport vessel: a bounded, ordered collection of containers.
#[derive(Debug)]
pub struct Vessel {
    name: String,
    cruise_speed_knots: f64,
    max_containers: usize,
    max_total_mass_kg: f64,
    /// Insertion order is display order.
    containers: Vec<BoxedCargo>,
    created_at: DateTime<Utc>,
}

impl Vessel {
    /// Create an empty vessel. `max_total_mass_tons` is converted to
    /// kilograms here; everything downstream works in kilograms.
    pub fn new(
        name: &str,
        cruise_speed_knots: f64,
        max_containers: usize,
        max_total_mass_tons: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            cruise_speed_knots,
            max_containers,
            max_total_mass_kg: max_total_mass_tons * KG_PER_TON,
            containers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cruise_speed_knots(&self) -> f64 {
        self.cruise_speed_knots
    }

    pub fn max_containers(&self) -> usize {
        self.max_containers
    }

    pub fn max_total_mass_kg(&self) -> f64 {
        self.max_total_mass_kg
    }

    /// Number of containers currently aboard.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Live sum of the loads aboard. Recomputed on every call so it can
    /// never drift from the containers' actual state.
    pub fn total_mass_kg(&self) -> f64 {
        self.containers.iter().map(|c| c.current_load_kg()).sum()
    }

    /// Would a container carrying `load_kg` fit aboard right now?
    pub fn check_room(&self, load_kg: f64) -> Result<()> {
        if self.containers.len() >= self.max_containers {
            return Err(FleetError::CapacityExceeded {
                vessel: self.name.clone(),
                max_containers: self.max_containers,
            });
        }
        if self.total_mass_kg() + load_kg > self.max_total_mass_kg {
            return Err(FleetError::WeightExceeded {
                vessel: self.name.clone(),
                max_total_mass_kg: self.max_total_mass_kg,
            });
        }
        Ok(())
    }

    /// Take a container aboard, after the ones already there. On rejection
    /// the container is handed back along with the error so the caller can
    /// return it to wherever it came from; it is never dropped.
    pub fn add_container(
        &mut self,
        container: BoxedCargo,
    ) -> std::result::Result<(), (BoxedCargo, FleetError)> {
        if let Err(e) = self.check_room(container.current_load_kg()) {
            return Err((container, e));
        }
        self.containers.push(container);
        Ok(())
    }

    /// Append a container whose admission has already been checked with
    /// [`check_room`](Self::check_room). Used by the fleet's transfer,
    /// which must check the destination before detaching from the source;
    /// the core is single-threaded so nothing runs in between.
    pub(crate) fn receive_checked(&mut self, container: BoxedCargo) {
        self.containers.push(container);
    }

    /// Detach the container with `serial` and hand it back. The container
    /// itself is not mutated; its load is preserved.
    pub fn remove_container(&mut self, serial: SerialId) -> Result<BoxedCargo> {
        let idx = self
            .position_of(serial)
            .ok_or_else(|| self.not_aboard(serial))?;
        Ok(self.containers.remove(idx))
    }

    /// Empty the container with `serial` in place.
    pub fn unload_container(&mut self, serial: SerialId) -> Result<()> {
        let idx = self
            .position_of(serial)
            .ok_or_else(|| self.not_aboard(serial))?;
        self.containers[idx].unload();
        Ok(())
    }

    /// Is the container with `serial` aboard?
    pub fn carries(&self, serial: SerialId) -> bool {
        self.position_of(serial).is_some()
    }

    /// The container with `serial`, if aboard.
    pub fn container(&self, serial: SerialId) -> Option<&dyn Cargo> {
        self.position_of(serial).map(|i| self.containers[i].as_ref())
    }

    pub(crate) fn container_mut(&mut self, serial: SerialId) -> Option<&mut BoxedCargo> {
        let idx = self.position_of(serial)?;
        Some(&mut self.containers[idx])
    }

    /// Containers aboard, in the order they were taken on. Restartable:
    /// each call starts a fresh pass.
    pub fn list_containers(&self) -> impl Iterator<Item = ContainerInfo> + '_ {
        self.containers.iter().map(|c| c.describe())
    }

    pub fn describe(&self) -> VesselInfo {
        VesselInfo {
            name: self.name.clone(),
            cruise_speed_knots: self.cruise_speed_knots,
            max_containers: self.max_containers,
            max_total_mass_kg: self.max_total_mass_kg,
            total_mass_kg: self.total_mass_kg(),
            containers: self.list_containers().collect(),
            created_at: self.created_at,
        }
    }

    /// Give up every container aboard, in on-board order. Used when the
    /// vessel is scrapped; the containers outlive it.
    pub(crate) fn into_containers(self) -> Vec<BoxedCargo> {
        self.containers
    }

    fn position_of(&self, serial: SerialId) -> Option<usize> {
        self.containers.iter().position(|c| c.serial() == serial)
    }

    fn not_aboard(&self, serial: SerialId) -> FleetError {
        FleetError::ContainerNotFound {
            serial,
            location: format!("vessel '{}'", self.name),
        }
    }
}
