//! The blocking [Google Maps Geocoding](https://developers.google.com/maps/documentation/geocoding) client.
//!
//! ### Example
//!
//! ```no_run
//! use geocoder::{Address, Forward, Google, Reverse};
//!
//! let google = Google::new(std::env::var("GOOGLE_API_KEY").unwrap());
//! let address = Address {
//!     number: 1600,
//!     street: "Amphitheatre Parkway".to_string(),
//!     city: "Mountain View".to_string(),
//!     state: "CA".to_string(),
//!     ..Default::default()
//! };
//! let location = google.forward(&address).unwrap();
//! let res = google.reverse(&location).unwrap();
//! assert_eq!(res[0].city, "Mountain View");
//! ```
use crate::blocking::{Forward, Reverse};
use crate::google::{forward_query, reverse_query, GoogleConfig, GoogleResponse};
use crate::{Address, GeocodingError, Location};
use crate::{HeaderValue, UA_STRING, USER_AGENT};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// An instance of the Google geocoding service
#[derive(Clone, Debug)]
pub struct Google {
    api_key: String,
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl Google {
    /// Create a new Google geocoding instance using the default endpoint
    ///
    /// An empty `api_key` sends requests without a `key` parameter.
    pub fn new(api_key: String) -> Self {
        Google::from_config(&GoogleConfig::new(api_key))
    }

    /// Create a new Google geocoding instance from a [`GoogleConfig`](crate::google::GoogleConfig)
    pub fn from_config(config: &GoogleConfig) -> Self {
        Google {
            api_key: config.api_key.clone(),
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
        }
    }

    /// Set a custom endpoint, e.g. a proxy or a mock server
    ///
    /// The endpoint is used verbatim as the request URL, without a trailing slash
    /// (i.e. "https://maps.googleapis.com/maps/api/geocode/json")
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_owned();
        self
    }

    /// Abort requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured HTTP client, e.g. one with a proxy or custom TLS settings
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// A forward-geocoding lookup of an address, returning the full response
    ///
    /// The address is sent as its [`query_string`](crate::Address::query_string).
    /// Any status other than `OK` is returned as an error.
    pub fn forward_full(&self, address: &Address) -> Result<GoogleResponse, GeocodingError> {
        self.execute(forward_query(address))
    }

    /// A reverse lookup of a point, returning the full response
    ///
    /// Names in the response are localized to `language` when it is not empty.
    /// See the [supported languages](https://developers.google.com/maps/faq#languagesupport).
    pub fn reverse_full(
        &self,
        location: &Location,
        language: &str,
    ) -> Result<GoogleResponse, GeocodingError> {
        self.execute(reverse_query(location, language))
    }

    /// A reverse lookup of a point with names localized to `language`
    ///
    /// An empty `language` leaves the choice to the provider, like [`reverse`](#method.reverse).
    #[instrument(skip(self), level = "debug")]
    pub fn reverse_with_language(
        &self,
        location: &Location,
        language: &str,
    ) -> Result<Vec<Address>, GeocodingError> {
        let res = self.reverse_full(location, language)?;
        Ok(res.addresses())
    }

    fn execute(
        &self,
        mut query: Vec<(&'static str, String)>,
    ) -> Result<GoogleResponse, GeocodingError> {
        debug!(endpoint = %self.endpoint, query = ?query, "sending geocoding request");
        if !self.api_key.is_empty() {
            query.push(("key", self.api_key.clone()));
        }
        let mut req = self
            .client
            .get(&self.endpoint)
            .header(USER_AGENT, HeaderValue::from_static(UA_STRING))
            .query(&query);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let resp = req.send()?;
        let status = resp.status();
        let body = resp.text()?;
        GoogleResponse::from_body(&body).map_err(|err| {
            if let GeocodingError::Decode(_) = err {
                warn!(http_status = %status, "undecodable geocoding response");
            }
            err
        })
    }
}

impl Forward for Google {
    /// A forward-geocoding lookup of an address. Please see [the documentation](https://developers.google.com/maps/documentation/geocoding/requests-geocoding) for details.
    ///
    /// Returns the point of the first result. An `OK` response without results fails
    /// with `NoResults`, since `(0, 0)` is itself a valid point.
    #[instrument(skip(self), level = "debug")]
    fn forward(&self, address: &Address) -> Result<Location, GeocodingError> {
        let res = self.forward_full(address)?;
        res.first_location()
    }
}

impl Reverse for Google {
    /// A reverse lookup of a point, returning every result in provider order.
    #[instrument(skip(self), level = "debug")]
    fn reverse(&self, location: &Location) -> Result<Vec<Address>, GeocodingError> {
        self.reverse_with_language(location, "")
    }
}
