//! Locatieserver documents and the normalized PDOK address

use domain::{Address, AddressBuilder, DomainError};
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level search response: `{ "response": { "docs": [...] } }`
#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResponse {
    pub response: RawResponseBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawResponseBody {
    #[serde(default)]
    pub docs: Vec<PdokDocument>,
}

/// One raw Locatieserver result; every field may be absent
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PdokDocument {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    pub weergavenaam: Option<String>,
    pub centroide_ll: Option<String>,
    pub geometrie_rd: Option<String>,
    pub straatnaam: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub huis_nlt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub huisnummer: Option<String>,
    pub postcode: Option<String>,
    pub woonplaatsnaam: Option<String>,
    pub buurtnaam: Option<String>,
    pub buurtcode: Option<String>,
    pub wijknaam: Option<String>,
    pub wijkcode: Option<String>,
    pub gemeentenaam: Option<String>,
    pub gemeentecode: Option<String>,
    pub provincienaam: Option<String>,
    pub provinciecode: Option<String>,
}

/// Accept strings and numbers (`huisnummer` is numeric in most documents)
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Address returned by the PDOK provider
///
/// Carries the generic [`Address`] plus the Locatieserver document metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdokAddress {
    #[serde(flatten)]
    address: Address,
    id: Option<String>,
    #[serde(rename = "type")]
    result_type: Option<String>,
    #[serde(rename = "address")]
    display_address: Option<String>,
    geometry_rd: Option<String>,
}

impl PdokAddress {
    /// The provider-neutral part of the address
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub fn into_address(self) -> Address {
        self.address
    }

    /// Stable Locatieserver document id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Document type: `adres`, `weg`, `postcode`, `woonplaats`, `gemeente`, ...
    #[must_use]
    pub fn result_type(&self) -> Option<&str> {
        self.result_type.as_deref()
    }

    /// Human-readable display name (`weergavenaam`)
    #[must_use]
    pub fn display_address(&self) -> Option<&str> {
        self.display_address.as_deref()
    }

    /// Raw RD New (EPSG:28992) geometry as WKT
    #[must_use]
    pub fn geometry_rd(&self) -> Option<&str> {
        self.geometry_rd.as_deref()
    }
}

impl AsRef<Address> for PdokAddress {
    fn as_ref(&self) -> &Address {
        &self.address
    }
}

/// Accumulates a [`PdokAddress`] on top of an [`AddressBuilder`]
#[derive(Debug, Clone)]
pub struct PdokAddressBuilder {
    address: AddressBuilder,
    id: Option<String>,
    result_type: Option<String>,
    display_address: Option<String>,
    geometry_rd: Option<String>,
}

impl PdokAddressBuilder {
    #[must_use]
    pub const fn new(address: AddressBuilder) -> Self {
        Self {
            address,
            id: None,
            result_type: None,
            display_address: None,
            geometry_rd: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_result_type(mut self, result_type: Option<String>) -> Self {
        self.result_type = result_type;
        self
    }

    #[must_use]
    pub fn with_display_address(mut self, display_address: Option<String>) -> Self {
        self.display_address = display_address;
        self
    }

    #[must_use]
    pub fn with_geometry_rd(mut self, geometry_rd: Option<String>) -> Self {
        self.geometry_rd = geometry_rd;
        self
    }

    /// Freeze the address
    ///
    /// # Errors
    ///
    /// Returns an error if the generic address fields are inconsistent.
    pub fn build(self) -> Result<PdokAddress, DomainError> {
        Ok(PdokAddress {
            address: self.address.build()?,
            id: self.id,
            result_type: self.result_type,
            display_address: self.display_address,
            geometry_rd: self.geometry_rd,
        })
    }
}
