//! The [Google Maps Geocoding](https://developers.google.com/maps/documentation/geocoding) provider.
//!
//! Geocoding methods are implemented on the [`Google`](struct.Google.html) struct.
//! The types in this module mirror the JSON returned by the API and are shared by the
//! blocking and the async client.
//!
//! An API key is required by the public endpoint. See the
//! [usage and billing](https://developers.google.com/maps/documentation/geocoding/usage-and-billing)
//! documentation for quota details.
use crate::address::{Address, AddressField, Location};
use crate::{Deserialize, GeocodingError, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "blocking")]
pub use crate::blocking::google::Google;

/// The public geocoding endpoint
pub static ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Connection settings for a Google client
///
/// Deserializable so it can be embedded in an application's own configuration file:
///
/// ```
/// use geocoder::google::GoogleConfig;
///
/// let config: GoogleConfig = serde_json::from_str(r#"{"api_key": "secret"}"#).unwrap();
/// assert_eq!(config.endpoint, geocoder::google::ENDPOINT);
/// assert_eq!(config.timeout_secs, None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// API key, omitted from requests when empty
    #[serde(default)]
    pub api_key: String,

    /// Geocoding endpoint (default: <https://maps.googleapis.com/maps/api/geocode/json>)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request transport timeout; no deadline when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    ENDPOINT.to_string()
}

impl GoogleConfig {
    pub fn new(api_key: String) -> Self {
        GoogleConfig {
            api_key,
            ..Default::default()
        }
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        GoogleConfig {
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

/// Query pairs of a forward-geocoding request
///
/// Spaces are left in place; the form-urlencoded query serializer turns them into `+`.
pub(crate) fn forward_query(address: &Address) -> Vec<(&'static str, String)> {
    vec![("address", address.query_string())]
}

/// Query pairs of a reverse-geocoding request; an empty `language` is omitted
pub(crate) fn reverse_query(location: &Location, language: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![(
        "latlng",
        format!("{:.8},{:.8}", location.latitude, location.longitude),
    )];
    if !language.is_empty() {
        query.push(("language", language.to_string()));
    }
    query
}

/// The outcome category reported by the provider for a single call
///
/// Parsing normalizes case and surrounding whitespace, so `"ok"` and `"OK"` are the
/// same status. Unrecognized values are kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "OK" => Status::Ok,
            "ZERO_RESULTS" => Status::ZeroResults,
            "OVER_QUERY_LIMIT" => Status::OverQueryLimit,
            "REQUEST_DENIED" => Status::RequestDenied,
            "INVALID_REQUEST" => Status::InvalidRequest,
            "UNKNOWN_ERROR" => Status::UnknownError,
            _ => Status::Other(raw.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        Status::from(raw.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> String {
        status.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::ZeroResults => "ZERO_RESULTS",
            Status::OverQueryLimit => "OVER_QUERY_LIMIT",
            Status::RequestDenied => "REQUEST_DENIED",
            Status::InvalidRequest => "INVALID_REQUEST",
            Status::UnknownError => "UNKNOWN_ERROR",
            Status::Other(raw) => raw,
        };
        f.write_str(s)
    }
}

/// The top-level JSON response returned by a geocoding request
///
/// See [the documentation](https://developers.google.com/maps/documentation/geocoding/requests-geocoding#GeocodingResponses)
/// for more details
///
///```json
/// {
///   "results": [
///     {
///       "address_components": [
///         { "long_name": "1600", "short_name": "1600", "types": ["street_number"] },
///         { "long_name": "Amphitheatre Parkway", "short_name": "Amphitheatre Pkwy", "types": ["route"] },
///         { "long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality", "political"] },
///         { "long_name": "Santa Clara County", "short_name": "Santa Clara County", "types": ["administrative_area_level_2", "political"] },
///         { "long_name": "California", "short_name": "CA", "types": ["administrative_area_level_1", "political"] },
///         { "long_name": "United States", "short_name": "US", "types": ["country", "political"] },
///         { "long_name": "94043", "short_name": "94043", "types": ["postal_code"] }
///       ],
///       "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
///       "geometry": {
///         "location": { "lat": 37.4224428, "lng": -122.0842467 },
///         "location_type": "ROOFTOP",
///         "viewport": {
///           "northeast": { "lat": 37.4239627802915, "lng": -122.0829089197085 },
///           "southwest": { "lat": 37.4212648197085, "lng": -122.0856068802915 }
///         }
///       },
///       "place_id": "ChIJeRpOeF67j4AR9ydy_PIzPuM",
///       "types": ["street_address"]
///     }
///   ],
///   "status": "OK"
/// }
///```
#[derive(Debug, Serialize, Deserialize)]
pub struct GoogleResponse {
    #[serde(default)]
    pub results: Vec<GoogleResult>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GoogleResponse {
    /// Decode a response body and classify its status
    ///
    /// Anything but `OK` becomes the matching [`GeocodingError`](crate::GeocodingError).
    pub fn from_body(body: &str) -> Result<Self, GeocodingError> {
        let res: GoogleResponse = serde_json::from_str(body)?;
        res.into_result()
    }

    /// Turn a non-`OK` status into an error, keeping the response otherwise
    pub fn into_result(self) -> Result<Self, GeocodingError> {
        let message = self.error_message.clone().unwrap_or_default();
        let err = match &self.status {
            Status::Ok => {
                debug!(results = self.results.len(), "geocoding response");
                return Ok(self);
            }
            Status::ZeroResults => GeocodingError::NoResults,
            Status::OverQueryLimit => GeocodingError::QuotaExceeded,
            Status::RequestDenied => GeocodingError::RequestDenied(message),
            Status::InvalidRequest => GeocodingError::InvalidRequest(message),
            Status::UnknownError => GeocodingError::Provider(message),
            Status::Other(raw) => GeocodingError::UnknownStatus(raw.clone()),
        };
        warn!(error = %err, "geocoding request failed");
        Err(err)
    }

    /// The point of the first result
    ///
    /// Reverse lookups never read the geometry, so it is only required here.
    pub fn first_location(&self) -> Result<Location, GeocodingError> {
        let res = self.results.first().ok_or(GeocodingError::NoResults)?;
        let geometry = res
            .geometry
            .as_ref()
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field("geometry"))?;
        Ok(Location::from(&geometry.location))
    }

    /// Every result as an [`Address`](crate::Address), in provider order
    pub fn addresses(&self) -> Vec<Address> {
        self.results.iter().map(Address::from).collect()
    }
}

/// A geocoding result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub partial_match: bool,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A single part of a result address, e.g. the street name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Result geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub viewport: Option<Bounds>,
}

/// Bounding-box metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<&LatLng> for Location {
    fn from(p: &LatLng) -> Self {
        Location::new(p.lat, p.lng)
    }
}

// Component type tags and the address field each one fills
static COMPONENT_FIELDS: &[(&str, AddressField)] = &[
    ("route", AddressField::Street),
    ("street_number", AddressField::Number),
    ("neighborhood", AddressField::Neighborhood),
    ("sublocality", AddressField::District),
    ("sublocality_level_1", AddressField::District),
    ("locality", AddressField::City),
    ("administrative_area_level_3", AddressField::City),
    ("administrative_area_level_2", AddressField::County),
    ("administrative_area_level_1", AddressField::State),
    ("country", AddressField::Country),
    ("postal_code", AddressField::PostalCode),
];

fn component_field(tag: &str) -> Option<AddressField> {
    COMPONENT_FIELDS
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, field)| *field)
}

impl From<&GoogleResult> for Address {
    /// Components are applied in provider order; a later component overwrites a field
    /// an earlier one already set.
    fn from(res: &GoogleResult) -> Self {
        let mut address = Address::default();
        for component in &res.address_components {
            for field in component.types.iter().filter_map(|tag| component_field(tag)) {
                address.set(field, &component.long_name);
            }
        }
        address.formatted_address = res.formatted_address.clone();
        address.place_type = res.types.first().cloned().unwrap_or_default();
        address
    }
}
