use crate::async_impl::{Forward, Reverse};
use crate::google::{forward_query, reverse_query, GoogleConfig, GoogleResponse};
use crate::{Address, GeocodingError, Location};
use crate::{HeaderValue, UA_STRING, USER_AGENT};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// An instance of the Google geocoding service
#[derive(Clone, Debug)]
pub struct Google {
    api_key: String,
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl Google {
    /// Create a new Google geocoding instance using the default endpoint
    pub fn new(api_key: String) -> Self {
        Google::from_config(&GoogleConfig::new(api_key))
    }

    /// Create a new Google geocoding instance from a [`GoogleConfig`](crate::google::GoogleConfig)
    pub fn from_config(config: &GoogleConfig) -> Self {
        Google {
            api_key: config.api_key.clone(),
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
        }
    }

    /// Set a custom endpoint, used verbatim as the request URL
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_owned();
        self
    }

    /// Abort requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// A forward-geocoding lookup of an address, returning the full response
    pub async fn forward_full(&self, address: &Address) -> Result<GoogleResponse, GeocodingError> {
        self.execute(forward_query(address)).await
    }

    /// A reverse lookup of a point, returning the full response
    pub async fn reverse_full(
        &self,
        location: &Location,
        language: &str,
    ) -> Result<GoogleResponse, GeocodingError> {
        self.execute(reverse_query(location, language)).await
    }

    /// A reverse lookup of a point with names localized to `language`
    #[instrument(skip(self), level = "debug")]
    pub async fn reverse_with_language(
        &self,
        location: &Location,
        language: &str,
    ) -> Result<Vec<Address>, GeocodingError> {
        let res = self.reverse_full(location, language).await?;
        Ok(res.addresses())
    }

    async fn execute(
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
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        GoogleResponse::from_body(&body).map_err(|err| {
            if let GeocodingError::Decode(_) = err {
                warn!(http_status = %status, "undecodable geocoding response");
            }
            err
        })
    }
}

#[async_trait]
impl Forward for Google {
    /// A forward-geocoding lookup of an address, returning the point of the first result.
    #[instrument(skip(self), level = "debug")]
    async fn forward(&self, address: &Address) -> Result<Location, GeocodingError> {
        let res = self.forward_full(address).await?;
        res.first_location()
    }
}

#[async_trait]
impl Reverse for Google {
    /// A reverse lookup of a point, returning every result in provider order.
    #[instrument(skip(self), level = "debug")]
    async fn reverse(&self, location: &Location) -> Result<Vec<Address>, GeocodingError> {
        self.reverse_with_language(location, "").await
    }
}
