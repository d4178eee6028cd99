//! Error types for Stevedore

use thiserror::Error;

use crate::container::SerialId;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("container {serial} cannot take {requested_kg} kg: {current_kg} kg already loaded, {capacity_kg} kg capacity")]
    Overfill {
        serial: SerialId,
        requested_kg: f64,
        current_kg: f64,
        capacity_kg: f64,
    },

    #[error("vessel '{vessel}' already carries its maximum of {max_containers} containers")]
    CapacityExceeded {
        vessel: String,
        max_containers: usize,
    },

    #[error("vessel '{vessel}' would exceed its maximum total mass of {max_total_mass_kg} kg")]
    WeightExceeded {
        vessel: String,
        max_total_mass_kg: f64,
    },

    #[error("container {serial} is not in {location}")]
    ContainerNotFound { serial: SerialId, location: String },

    #[error("no vessel named '{0}'")]
    VesselNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FleetError>;
