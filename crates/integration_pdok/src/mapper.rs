//! Locatieserver response mapping
//!
//! Turns a raw response body into [`PdokAddress`]es in the order the service
//! ranked them. A document without a usable `centroide_ll` point fails the
//! whole response.

use domain::{AddressBuilder, GeoLocation};

use crate::error::PdokError;
use crate::models::{PdokAddress, PdokAddressBuilder, PdokDocument, RawSearchResponse};

/// Name reported in [`domain::Address::provided_by`]
pub const PROVIDER_NAME: &str = "nationaal_georegister";

const COUNTRY_NAME: &str = "Netherlands";
const COUNTRY_CODE: &str = "NL";
const TIMEZONE: &str = "Europe/Amsterdam";

/// Admin level numbers used for the Dutch hierarchy
const LEVEL_PROVINCE: u8 = 1;
const LEVEL_MUNICIPALITY: u8 = 2;
const LEVEL_DISTRICT: u8 = 3;
const LEVEL_NEIGHBOURHOOD: u8 = 5;

/// Decode and map a Locatieserver response body
///
/// `query` is the executed request URL and only used in error messages.
///
/// # Errors
///
/// Returns `InvalidServerResponse` if the body is not valid JSON (also after
/// Latin-1 repair) or a document cannot be mapped.
pub fn parse_search_response(query: &str, body: &[u8]) -> Result<Vec<PdokAddress>, PdokError> {
    decode(query, body)?
        .response
        .docs
        .into_iter()
        .map(|doc| map_document(doc).map_err(|reason| PdokError::invalid_response(query, reason)))
        .collect()
}

fn decode(query: &str, body: &[u8]) -> Result<RawSearchResponse, PdokError> {
    match serde_json::from_slice(body) {
        Ok(response) => Ok(response),
        Err(e) if std::str::from_utf8(body).is_err() => {
            serde_json::from_str(&latin1_to_utf8(body)).map_err(|repaired| {
                PdokError::invalid_response(
                    query,
                    format!("{e} (after encoding repair: {repaired})"),
                )
            })
        },
        Err(e) => Err(PdokError::invalid_response(query, e.to_string())),
    }
}

/// Reinterpret bytes as ISO-8859-1
fn latin1_to_utf8(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Parse a WKT `POINT(<lon> <lat>)` string
///
/// # Errors
///
/// Returns a description of the problem if the string is not a two-token
/// point or the coordinates are out of range.
pub fn parse_centroid(point: &str) -> Result<GeoLocation, String> {
    let inner = point
        .trim()
        .strip_prefix("POINT")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| format!("malformed centroid {point:?}"))?;

    let mut tokens = inner.split_whitespace();
    let (Some(lon), Some(lat), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(format!("centroid {point:?} does not hold two coordinates"));
    };

    let longitude: f64 = lon
        .parse()
        .map_err(|_| format!("invalid longitude {lon:?} in centroid"))?;
    let latitude: f64 = lat
        .parse()
        .map_err(|_| format!("invalid latitude {lat:?} in centroid"))?;

    GeoLocation::new(latitude, longitude).map_err(|e| e.to_string())
}

fn map_document(doc: PdokDocument) -> Result<PdokAddress, String> {
    let label = doc.id.as_deref().unwrap_or("<no id>");
    let centroid = doc
        .centroide_ll
        .as_deref()
        .ok_or_else(|| format!("document {label} has no centroide_ll"))?;
    let coordinates = parse_centroid(centroid).map_err(|e| format!("document {label}: {e}"))?;

    let mut address = AddressBuilder::new(PROVIDER_NAME)
        .with_coordinates(coordinates)
        .with_street_number(doc.huis_nlt.or(doc.huisnummer))
        .with_street_name(doc.straatnaam)
        .with_postal_code(doc.postcode)
        .with_locality(doc.woonplaatsnaam);

    let levels = [
        (LEVEL_NEIGHBOURHOOD, doc.buurtnaam, doc.buurtcode),
        (LEVEL_DISTRICT, doc.wijknaam, doc.wijkcode),
        (LEVEL_MUNICIPALITY, doc.gemeentenaam, doc.gemeentecode),
        (LEVEL_PROVINCE, doc.provincienaam, doc.provinciecode),
    ];
    for (level, name, code) in levels {
        if let Some(name) = name {
            address = address.add_admin_level(level, name, code);
        }
    }

    let address = address
        .with_country(COUNTRY_NAME)
        .with_country_code(COUNTRY_CODE)
        .with_timezone(TIMEZONE);

    PdokAddressBuilder::new(address)
        .with_id(doc.id)
        .with_result_type(doc.result_type)
        .with_display_address(doc.weergavenaam)
        .with_geometry_rd(doc.geometrie_rd)
        .build()
        .map_err(|e| e.to_string())
}
