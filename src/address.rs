//! The structured address and coordinate types shared by all clients.
use crate::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured postal address
///
/// Every text field may be empty. A `number` of `0` means the street number is absent.
/// `formatted_address` and `place_type` are only populated by reverse-geocoding and are
/// ignored when an `Address` is used as a query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub neighborhood: String,
    pub district: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub formatted_address: String,
    pub place_type: String,
}

impl Address {
    /// Join the populated fields into a single query string
    ///
    /// Fields are always emitted in this order, separated by `", "`:
    /// number, street, neighborhood, district, postal code, city, county, state, country.
    ///
    /// ```
    /// use geocoder::Address;
    ///
    /// let address = Address {
    ///     number: 123,
    ///     street: "Cork Street".to_string(),
    ///     city: "Cork".to_string(),
    ///     country: "Ireland".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(address.query_string(), "123, Cork Street, Cork, Ireland");
    /// ```
    pub fn query_string(&self) -> String {
        let number = if self.number > 0 {
            self.number.to_string()
        } else {
            String::new()
        };
        let parts: [&str; 9] = [
            number.as_str(),
            &self.street,
            &self.neighborhood,
            &self.district,
            &self.postal_code,
            &self.city,
            &self.county,
            &self.state,
            &self.country,
        ];
        parts
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<&str>>()
            .join(", ")
    }

    pub(crate) fn set(&mut self, field: AddressField, value: &str) {
        match field {
            AddressField::Street => self.street = value.to_owned(),
            // non-numeric house numbers ("12A") are not representable
            AddressField::Number => self.number = value.trim().parse().unwrap_or(0),
            AddressField::Neighborhood => self.neighborhood = value.to_owned(),
            AddressField::District => self.district = value.to_owned(),
            AddressField::City => self.city = value.to_owned(),
            AddressField::County => self.county = value.to_owned(),
            AddressField::State => self.state = value.to_owned(),
            AddressField::Country => self.country = value.to_owned(),
            AddressField::PostalCode => self.postal_code = value.to_owned(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_string())
    }
}

/// The `Address` fields a provider address component can populate
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AddressField {
    Street,
    Number,
    Neighborhood,
    District,
    City,
    County,
    State,
    Country,
    PostalCode,
}

/// A latitude / longitude pair in decimal degrees
///
/// Values are passed to the provider as given; out-of-range coordinates are rejected
/// by the provider, not here.
///
/// Unlike [`Point`](struct.Point.html), the fields are named, so there is no ordering
/// to get wrong. Converting to and from a `Point` uses `[Longitude, Latitude]` (`x, y`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
        }
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Location::new(point.y(), point.x())
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Point::new(location.longitude, location.latitude)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_address_formats_to_empty_string() {
        assert_eq!(Address::default().query_string(), "");
    }

    #[test]
    fn number_only() {
        let address = Address {
            number: 789,
            ..Default::default()
        };
        assert_eq!(address.query_string(), "789");
    }

    #[test]
    fn skips_empty_fields() {
        let address = Address {
            street: "Cork Street".to_string(),
            number: 123,
            city: "Cork".to_string(),
            country: "Ireland".to_string(),
            ..Default::default()
        };
        assert_eq!(address.query_string(), "123, Cork Street, Cork, Ireland");
        assert_eq!(address.to_string(), "123, Cork Street, Cork, Ireland");
    }

    #[test]
    fn fixed_field_order() {
        let address = Address {
            street: "Avenida Paulista".to_string(),
            number: 456,
            neighborhood: "Jardim Paulista".to_string(),
            district: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            county: "Região Metropolitana".to_string(),
            state: "SP".to_string(),
            country: "Brasil".to_string(),
            postal_code: "01010-101".to_string(),
            formatted_address: "ignored".to_string(),
            place_type: "street_address".to_string(),
        };
        assert_eq!(
            address.query_string(),
            "456, Avenida Paulista, Jardim Paulista, Bela Vista, 01010-101, São Paulo, \
             Região Metropolitana, SP, Brasil"
        );
    }

    #[test]
    fn non_numeric_street_number_resets_to_zero() {
        let mut address = Address::default();
        address.set(AddressField::Number, "12A");
        assert_eq!(address.number, 0);
        address.set(AddressField::Number, "1578");
        assert_eq!(address.number, 1578);
        address.set(AddressField::Number, "n/a");
        assert_eq!(address.number, 0);
    }

    #[test]
    fn location_point_order() {
        let location = Location::new(41.40139, 2.12870);
        let point: Point<f64> = location.into();
        assert_eq!(point, Point::new(2.12870, 41.40139));
        assert_eq!(Location::from(point), location);
    }
}
