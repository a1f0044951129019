//! Provider-neutral address record and its builder

use serde::Serialize;

use crate::entities::admin_level::{AdminLevel, AdminLevelCollection};
use crate::errors::DomainError;
use crate::value_objects::{Country, GeoLocation, Timezone};

/// A geocoded address as returned by any provider
///
/// Immutable once built; construct through [`AddressBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    provided_by: String,
    coordinates: Option<GeoLocation>,
    street_number: Option<String>,
    street_name: Option<String>,
    postal_code: Option<String>,
    locality: Option<String>,
    admin_levels: AdminLevelCollection,
    country: Option<Country>,
    timezone: Option<Timezone>,
}

impl Address {
    /// Name of the provider that produced this address
    #[must_use]
    pub fn provided_by(&self) -> &str {
        &self.provided_by
    }

    #[must_use]
    pub const fn coordinates(&self) -> Option<GeoLocation> {
        self.coordinates
    }

    #[must_use]
    pub fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    #[must_use]
    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    #[must_use]
    pub const fn admin_levels(&self) -> &AdminLevelCollection {
        &self.admin_levels
    }

    #[must_use]
    pub const fn country(&self) -> Option<&Country> {
        self.country.as_ref()
    }

    #[must_use]
    pub const fn timezone(&self) -> Option<&Timezone> {
        self.timezone.as_ref()
    }
}

/// Accumulates address fields and freezes them into an [`Address`]
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    provided_by: String,
    coordinates: Option<GeoLocation>,
    street_number: Option<String>,
    street_name: Option<String>,
    postal_code: Option<String>,
    locality: Option<String>,
    admin_levels: Vec<AdminLevel>,
    country: Option<String>,
    country_code: Option<String>,
    timezone: Option<Timezone>,
}

impl AddressBuilder {
    /// Start a new address for the given provider
    #[must_use]
    pub fn new(provided_by: impl Into<String>) -> Self {
        Self {
            provided_by: provided_by.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_coordinates(mut self, coordinates: GeoLocation) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    #[must_use]
    pub fn with_street_number(mut self, street_number: Option<String>) -> Self {
        self.street_number = street_number;
        self
    }

    #[must_use]
    pub fn with_street_name(mut self, street_name: Option<String>) -> Self {
        self.street_name = street_name;
        self
    }

    #[must_use]
    pub fn with_postal_code(mut self, postal_code: Option<String>) -> Self {
        self.postal_code = postal_code;
        self
    }

    #[must_use]
    pub fn with_locality(mut self, locality: Option<String>) -> Self {
        self.locality = locality;
        self
    }

    /// Append an administrative level; validated in [`AddressBuilder::build`]
    #[must_use]
    pub fn add_admin_level(
        mut self,
        level: u8,
        name: impl Into<String>,
        code: Option<String>,
    ) -> Self {
        self.admin_levels.push(AdminLevel::new(level, name, code));
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<Timezone>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Freeze the accumulated fields
    ///
    /// # Errors
    ///
    /// Returns an error if the administrative levels are out of range or
    /// contain duplicates.
    pub fn build(self) -> Result<Address, DomainError> {
        let country = if self.country.is_some() || self.country_code.is_some() {
            Some(Country::new(self.country, self.country_code))
        } else {
            None
        };

        Ok(Address {
            provided_by: self.provided_by,
            coordinates: self.coordinates,
            street_number: self.street_number,
            street_name: self.street_name,
            postal_code: self.postal_code,
            locality: self.locality,
            admin_levels: AdminLevelCollection::new(self.admin_levels)?,
            country,
            timezone: self.timezone,
        })
    }
}
