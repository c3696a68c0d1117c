pub mod google;

use crate::{Address, GeocodingError, Location};

/// Reverse-geocode a coordinate.
///
/// Returns every candidate address the provider knows for the location, most specific
/// first, in the order the provider returned them.
///
/// Examples
///
/// ```no_run
/// use geocoder::{Google, Location, Reverse};
///
/// let google = Google::new(std::env::var("GOOGLE_API_KEY").unwrap());
/// let res = google.reverse(&Location::new(50.006414, 36.252432)).unwrap();
/// assert_eq!(res[0].city, "Kharkiv");
/// ```
pub trait Reverse {
    fn reverse(&self, location: &Location) -> Result<Vec<Address>, GeocodingError>;
}

/// Forward-geocode an address.
///
/// Resolves the address to the point of the provider's best match.
///
/// Examples
///
/// ```no_run
/// use geocoder::{Address, Forward, Google};
///
/// let google = Google::new(std::env::var("GOOGLE_API_KEY").unwrap());
/// let address = Address {
///     street: "Cork Street".to_string(),
///     city: "Cork".to_string(),
///     country: "Ireland".to_string(),
///     ..Default::default()
/// };
/// let res = google.forward(&address).unwrap();
/// assert!((res.latitude - 51.9).abs() < 0.1);
/// ```
pub trait Forward {
    fn forward(&self, address: &Address) -> Result<Location, GeocodingError>;
}
