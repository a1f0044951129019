//! Timezone value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// An IANA timezone identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timezone(String);

impl Timezone {
    /// Create a new timezone
    ///
    /// The identifier is not checked against the IANA database.
    #[must_use]
    pub fn new(tz: impl Into<String>) -> Self {
        Self(tz.into())
    }

    /// Get the timezone string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timezone {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_creation() {
        let tz = Timezone::new("Europe/Amsterdam");
        assert_eq!(tz.as_str(), "Europe/Amsterdam");
        assert_eq!(format!("{tz}"), "Europe/Amsterdam");
    }

    #[test]
    fn test_timezone_serializes_as_string() {
        let tz: Timezone = "Europe/Amsterdam".into();
        let json = serde_json::to_string(&tz).expect("serialize");
        assert_eq!(json, "\"Europe/Amsterdam\"");
    }
}
