//! Output formatting module

pub mod human;
pub mod json;

use crate::fleet::FleetInfo;

/// How listings are rendered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_fleet(info: &FleetInfo, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_fleet(info),
        OutputFormat::Json => json::format_fleet(info),
    }
}
