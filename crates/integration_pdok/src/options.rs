//! Query option layering
//!
//! Every Locatieserver request is described by an [`OptionMap`] assembled
//! from ordered layers. Later layers overwrite earlier ones key by key while
//! keeping the key's original position. Caller-supplied layers never get to
//! set the keys in [`DENIED_OPTIONS`]; the response shape and row count stay
//! under provider control.

use domain::{QueryData, QueryValue};

/// Resolved query-string parameters for one request
pub type OptionMap = QueryData;

/// Static option table, one per query type slot
pub type OptionTable = &'static [(&'static str, &'static str)];

/// Keys callers may never set
pub const DENIED_OPTIONS: [&str; 4] = ["fl", "rows", "type", "wt"];

/// Document fields requested from the Locatieserver
pub const FIELD_LIST: &str = "weergavenaam,id,type,centroide_ll,huis_nlt,huisnummer,straatnaam,\
postcode,woonplaatsnaam,gemeentenaam,gemeentecode,provincienaam,provinciecode,buurtnaam,buurtcode,\
wijknaam,wijkcode,geometrie_rd";

pub const DEFAULT_OPTIONS: OptionTable = &[("fl", FIELD_LIST)];

pub const DEFAULT_OPTIONS_GEOCODE: OptionTable = &[(
    "bq",
    "type:gemeente^0.5 type:woonplaats^0.5 type:weg^1.0 type:postcode^1.5 type:adres^1.5",
)];

pub const REQUIRED_OPTIONS_GEOCODE: OptionTable = &[];

pub const DEFAULT_OPTIONS_REVERSE: OptionTable = &[];

pub const REQUIRED_OPTIONS_REVERSE: OptionTable = &[("type", "adres")];

pub const DEFAULT_OPTIONS_SUGGEST_ADDRESS: OptionTable = &[("fl", FIELD_LIST)];

pub const DEFAULT_OPTIONS_SUGGEST_STREET: OptionTable = &[("fl", FIELD_LIST)];

pub const DEFAULT_OPTIONS_SUGGEST_POSTCODE: OptionTable = &[("fl", FIELD_LIST)];

pub const REQUIRED_OPTIONS_SUGGEST: OptionTable = &[];

/// Returns true if callers may not set `key`
#[must_use]
pub fn is_denied(key: &str) -> bool {
    DENIED_OPTIONS.contains(&key)
}

/// Copy of `options` without the denied keys
#[must_use]
pub fn strip_denied(options: &OptionMap) -> OptionMap {
    options
        .iter()
        .filter(|(key, _)| !is_denied(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// One layer of options with its provenance
#[derive(Debug, Clone, PartialEq)]
pub enum OptionLayer {
    /// Provider-controlled values, merged as-is
    System(OptionMap),
    /// Caller-controlled values, denied keys are dropped on merge
    Caller(OptionMap),
}

impl OptionLayer {
    /// System layer from a static table
    #[must_use]
    pub fn table(table: OptionTable) -> Self {
        Self::System(
            table
                .iter()
                .map(|(key, value)| ((*key).to_string(), QueryValue::from(*value)))
                .collect(),
        )
    }

    /// System layer from computed key/value pairs
    #[must_use]
    pub fn computed<const N: usize>(pairs: [(&str, QueryValue); N]) -> Self {
        Self::System(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    /// Caller layer borrowed from an instance or per-query map
    #[must_use]
    pub fn caller(options: &OptionMap) -> Self {
        Self::Caller(options.clone())
    }
}

/// Merge layers from lowest to highest precedence
#[must_use]
pub fn merge(layers: impl IntoIterator<Item = OptionLayer>) -> OptionMap {
    let mut merged = OptionMap::new();
    for layer in layers {
        match layer {
            OptionLayer::System(options) => merged.extend(options),
            OptionLayer::Caller(options) => {
                merged.extend(options.into_iter().filter(|(key, _)| !is_denied(key)));
            },
        }
    }
    merged
}
