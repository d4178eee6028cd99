//! Containers: bounded mass payloads with unique serial ids
//!
//! A container is independently loadable and unloadable and is either
//! free (in the fleet's pool) or aboard exactly one vessel.

mod serial;
mod types;

pub use serial::{SerialFactory, SerialId};
pub use types::{BasicContainer, BoxedCargo, Cargo, ContainerInfo, ContainerKind};
