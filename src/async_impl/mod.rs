use async_trait::async_trait;

use crate::{Address, GeocodingError, Location};

pub mod google;

/// Reverse-geocode a coordinate, see [`blocking::Reverse`](crate::blocking::Reverse)
#[async_trait]
pub trait Reverse {
    async fn reverse(&self, location: &Location) -> Result<Vec<Address>, GeocodingError>;
}

/// Forward-geocode an address, see [`blocking::Forward`](crate::blocking::Forward)
#[async_trait]
pub trait Forward {
    async fn forward(&self, address: &Address) -> Result<Location, GeocodingError>;
}
