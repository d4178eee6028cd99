//! Stevedore - fleet and container management with capacity enforcement
//!
//! Tracks a fleet of transport vessels and shippable containers and
//! enforces their rated limits: a container never holds more cargo than
//! its capacity, and a vessel never holds more containers or more
//! aggregate mass than it is rated for. Every operation either applies in
//! full or fails with no effect; the cross-vessel transfer in particular
//! is all-or-nothing. The interactive menu in the binary is a thin caller;
//! all rules live here.
//!
//! # Example
//!
//! ```
//! use stevedore::Fleet;
//!
//! let mut fleet = Fleet::new();
//! fleet.add_vessel("Albatross", 18.0, 4, 10.0).unwrap();
//! let serial = fleet.new_container(2000.0).unwrap();
//! fleet.load_container(serial, 1500.0).unwrap();
//! fleet.place_container(serial, "Albatross").unwrap();
//! assert_eq!(fleet.vessel("Albatross").unwrap().total_mass_kg(), 1500.0);
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod fleet;
pub mod output;
pub mod repl;
pub mod vessel;

pub use container::{BasicContainer, BoxedCargo, Cargo, ContainerInfo, ContainerKind, SerialFactory, SerialId};
pub use error::{FleetError, Result};
pub use fleet::{Fleet, FleetInfo, Location};
pub use output::{format_fleet, OutputFormat};
pub use vessel::{Vessel, VesselInfo, KG_PER_TON};
