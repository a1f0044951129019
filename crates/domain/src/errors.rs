//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the WGS84 range
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates {
        /// Rejected latitude
        latitude: f64,
        /// Rejected longitude
        longitude: f64,
    },

    /// Administrative level outside 1..=5
    #[error("Administrative level {level} is out of range (1 to {max})")]
    InvalidAdminLevel {
        /// Rejected level
        level: u8,
        /// Highest permitted level
        max: u8,
    },

    /// The same administrative level was added twice
    #[error("Administrative level {0} is defined more than once")]
    DuplicateAdminLevel(u8),
}
