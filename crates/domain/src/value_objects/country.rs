//! Country value object

use serde::{Deserialize, Serialize};

/// A country with an optional display name and ISO 3166-1 alpha-2 code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    name: Option<String>,
    code: Option<String>,
}

impl Country {
    /// Create a country; the code is upper-cased
    #[must_use]
    pub fn new(name: Option<String>, code: Option<String>) -> Self {
        Self {
            name,
            code: code.map(|c| c.to_uppercase()),
        }
    }

    /// Country name, if known
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// ISO country code, if known
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
