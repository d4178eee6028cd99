//! Fleet registry: every vessel and every container in the system
//!
//! The fleet is the single owner of all state. Free containers live in the
//! fleet's pool; containers aboard a vessel are owned by that vessel.
//! Moving the boxed container between those collections makes "a container
//! is in at most one place" structural rather than something checked after
//! the fact.
//!
//! Vessels are addressed by name; the fleet rejects duplicate names so the
//! address is unambiguous.

use serde::Serialize;

use crate::container::{
    BasicContainer, BoxedCargo, ContainerInfo, SerialFactory, SerialId,
};
use crate::error::{FleetError, Result};
use crate::vessel::{Vessel, VesselInfo};

/// Where a container currently lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// In the fleet's free pool, not aboard any vessel.
    Free,
    /// Aboard the named vessel.
    Aboard(String),
}

/// Serializable snapshot of the whole fleet.
#[derive(Debug, Clone, Serialize)]
pub struct FleetInfo {
    pub vessels: Vec<VesselInfo>,
    pub free_containers: Vec<ContainerInfo>,
}

/// Owns the serial counter, the free container pool and all vessels.
#[derive(Debug)]
pub struct Fleet {
    serials: SerialFactory,
    free: Vec<BoxedCargo>,
    vessels: Vec<Vessel>,
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            serials: SerialFactory::new(),
            free: Vec::new(),
            vessels: Vec::new(),
        }
    }

    // --- vessels ---

    /// Register a new empty vessel. `max_total_mass_tons` is in metric
    /// tons; the vessel stores and checks the limit in kilograms.
    pub fn add_vessel(
        &mut self,
        name: &str,
        cruise_speed_knots: f64,
        max_containers: usize,
        max_total_mass_tons: f64,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(FleetError::InvalidArgument(
                "vessel name cannot be empty".to_string(),
            ));
        }
        if self.vessels.iter().any(|v| v.name() == name) {
            return Err(FleetError::InvalidArgument(format!(
                "a vessel named '{}' already exists",
                name
            )));
        }
        ensure_non_negative("cruise speed", cruise_speed_knots)?;
        ensure_non_negative("maximum total mass", max_total_mass_tons)?;
        self.vessels.push(Vessel::new(
            name,
            cruise_speed_knots,
            max_containers,
            max_total_mass_tons,
        ));
        Ok(())
    }

    /// Scrap a vessel. Containers still aboard are detached back into the
    /// free pool in their on-board order, not destroyed. Returns the
    /// serials of the detached containers.
    pub fn remove_vessel(&mut self, name: &str) -> Result<Vec<SerialId>> {
        let idx = self.vessel_position(name)?;
        let vessel = self.vessels.remove(idx);
        let detached = vessel.into_containers();
        let serials = detached.iter().map(|c| c.serial()).collect();
        self.free.extend(detached);
        Ok(serials)
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel(&self, name: &str) -> Result<&Vessel> {
        self.vessels
            .iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| FleetError::VesselNotFound(name.to_string()))
    }

    // --- containers ---

    /// Create a new empty basic container in the free pool and return its
    /// freshly issued serial.
    pub fn new_container(&mut self, max_capacity_kg: f64) -> Result<SerialId> {
        ensure_non_negative("maximum capacity", max_capacity_kg)?;
        let serial = self.serials.issue();
        self.free
            .push(Box::new(BasicContainer::new(serial, max_capacity_kg)));
        Ok(serial)
    }

    /// Delete a container from the free pool. A container aboard a vessel
    /// cannot be deleted; take it off first.
    pub fn remove_container(&mut self, serial: SerialId) -> Result<()> {
        let idx = self
            .free_position(serial)
            .ok_or_else(|| not_in_free_pool(serial))?;
        self.free.remove(idx);
        Ok(())
    }

    /// Load cargo into a container wherever it currently lives.
    pub fn load_container(&mut self, serial: SerialId, amount_kg: f64) -> Result<()> {
        self.container_mut(serial)?.load(amount_kg)
    }

    /// Empty a container wherever it currently lives.
    pub fn unload_container(&mut self, serial: SerialId) -> Result<()> {
        self.container_mut(serial)?.unload();
        Ok(())
    }

    /// Snapshot a single container wherever it currently lives.
    pub fn describe_container(&self, serial: SerialId) -> Result<ContainerInfo> {
        if let Some(idx) = self.free_position(serial) {
            return Ok(self.free[idx].describe());
        }
        for vessel in &self.vessels {
            if let Some(c) = vessel.container(serial) {
                return Ok(c.describe());
            }
        }
        Err(FleetError::ContainerNotFound {
            serial,
            location: "the fleet".to_string(),
        })
    }

    // --- placement ---

    /// Move a free container aboard a vessel. On rejection the container
    /// stays in the free pool, unchanged and in its old position.
    pub fn place_container(&mut self, serial: SerialId, vessel_name: &str) -> Result<()> {
        let vessel_idx = self.vessel_position(vessel_name)?;
        let free_idx = self
            .free_position(serial)
            .ok_or_else(|| not_in_free_pool(serial))?;

        let container = self.free.remove(free_idx);
        match self.vessels[vessel_idx].add_container(container) {
            Ok(()) => Ok(()),
            Err((container, err)) => {
                self.free.insert(free_idx, container);
                Err(err)
            }
        }
    }

    /// Take a container off a vessel and return it to the free pool.
    pub fn remove_from_vessel(&mut self, vessel_name: &str, serial: SerialId) -> Result<()> {
        let idx = self.vessel_position(vessel_name)?;
        let container = self.vessels[idx].remove_container(serial)?;
        self.free.push(container);
        Ok(())
    }

    /// Move a container from one vessel to another, all or nothing: if the
    /// destination cannot admit it, neither vessel changes and the
    /// destination's admission error is returned.
    pub fn transfer_container(
        &mut self,
        serial: SerialId,
        source: &str,
        dest: &str,
    ) -> Result<()> {
        if source == dest {
            return Err(FleetError::InvalidArgument(
                "source and destination vessel are the same".to_string(),
            ));
        }
        let src_idx = self.vessel_position(source)?;
        let dst_idx = self.vessel_position(dest)?;

        // Admission is checked against the destination before anything
        // leaves the source, so a failed transfer cannot strand the
        // container.
        let load_kg = self.vessels[src_idx]
            .container(serial)
            .ok_or_else(|| FleetError::ContainerNotFound {
                serial,
                location: format!("vessel '{}'", source),
            })?
            .current_load_kg();
        self.vessels[dst_idx].check_room(load_kg)?;

        let container = self.vessels[src_idx].remove_container(serial)?;
        self.vessels[dst_idx].receive_checked(container);
        Ok(())
    }

    // --- queries ---

    /// Where does this container live, if it exists at all?
    pub fn locate(&self, serial: SerialId) -> Option<Location> {
        if self.free_position(serial).is_some() {
            return Some(Location::Free);
        }
        self.vessels
            .iter()
            .find(|v| v.carries(serial))
            .map(|v| Location::Aboard(v.name().to_string()))
    }

    /// True when the container is aboard any vessel.
    pub fn is_aboard(&self, serial: SerialId) -> bool {
        matches!(self.locate(serial), Some(Location::Aboard(_)))
    }

    /// Free containers in creation order.
    pub fn free_containers(&self) -> impl Iterator<Item = ContainerInfo> + '_ {
        self.free.iter().map(|c| c.describe())
    }

    pub fn describe(&self) -> FleetInfo {
        FleetInfo {
            vessels: self.vessels.iter().map(|v| v.describe()).collect(),
            free_containers: self.free_containers().collect(),
        }
    }

    fn container_mut(&mut self, serial: SerialId) -> Result<&mut BoxedCargo> {
        if let Some(idx) = self.free_position(serial) {
            return Ok(&mut self.free[idx]);
        }
        for vessel in &mut self.vessels {
            if let Some(c) = vessel.container_mut(serial) {
                return Ok(c);
            }
        }
        Err(FleetError::ContainerNotFound {
            serial,
            location: "the fleet".to_string(),
        })
    }

    fn free_position(&self, serial: SerialId) -> Option<usize> {
        self.free.iter().position(|c| c.serial() == serial)
    }

    fn vessel_position(&self, name: &str) -> Result<usize> {
        self.vessels
            .iter()
            .position(|v| v.name() == name)
            .ok_or_else(|| FleetError::VesselNotFound(name.to_string()))
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_non_negative(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FleetError::InvalidArgument(format!(
            "{} must be a non-negative number, got {}",
            what, value
        )));
    }
    Ok(())
}

fn not_in_free_pool(serial: SerialId) -> FleetError {
    FleetError::ContainerNotFound {
        serial,
        location: "the free pool".to_string(),
    }
}
