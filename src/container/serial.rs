//! Serial number assignment for containers
//!
//! Every container receives a unique, immutable serial id at construction
//! time. The counter lives in an explicit factory owned by the fleet rather
//! than a process-wide static, so construction stays side-effect-visible
//! and testable.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FleetError, Result};

/// Unique identifier of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SerialId(u32);

impl SerialId {
    /// The raw counter value behind this id.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SerialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CNT-{}", self.0)
    }
}

impl FromStr for SerialId {
    type Err = FleetError;

    /// Accepts both the display form (`CNT-7`) and the bare number (`7`).
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches("CNT-");
        digits
            .parse::<u32>()
            .map(SerialId)
            .map_err(|_| FleetError::InvalidArgument(format!("'{}' is not a container serial", s)))
    }
}

/// Issues monotonically increasing serial ids.
#[derive(Debug)]
pub struct SerialFactory {
    next: u32,
}

impl SerialFactory {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next serial id. Ids are never reused, even after the
    /// container they were assigned to has been deleted.
    pub fn issue(&mut self) -> SerialId {
        let id = SerialId(self.next);
        self.next += 1;
        id
    }
}

impl Default for SerialFactory {
    fn default() -> Self {
        Self::new()
    }
}
