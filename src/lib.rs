//! This crate provides forward– and reverse-geocoding of structured postal addresses
//! against the [Google Maps Geocoding API](https://developers.google.com/maps/documentation/geocoding).
//!
//! An [`Address`](struct.Address.html) is turned into a single query string, sent to the
//! provider, and resolved to a [`Location`](struct.Location.html). The reverse direction
//! returns every candidate `Address` the provider knows for a `Location`, optionally
//! localized to a language.
//!
//! The client implements the `Forward` and `Reverse` traits; the full provider response
//! is available through the `forward_full` and `reverse_full` methods. Provider status
//! codes other than `OK` surface as typed [`GeocodingError`](enum.GeocodingError.html)s.
//!
//! Each client owns its API key and endpoint, so clients with different credentials can
//! be used side by side and shared between threads.
//!
//! ### A note on Coordinate Order
//! `Location` names its fields, so there is no ambiguity. When converting to or from
//! [`Point`](struct.Point.html) the order is `[Longitude, Latitude]` (`x, y`).
//!
//! ### Usage of rustls
//!
//! If you like to use [rustls](https://github.com/ctz/rustls) instead of OpenSSL
//! you can enable the `rustls-tls` feature in your `Cargo.toml`:
//!
//!```toml
//![dependencies]
//!geocoder = { version = "*", default-features = false, features = ["rustls-tls", "blocking"] }
//!```
//!
//! ### Async
//!
//! An async client with the same surface lives in `async_impl`, behind the `async` feature.

static UA_STRING: &str = "Rust-Geocoder";

pub use geo_types::Point;
use reqwest::header::{HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

#[cfg(feature = "async")]
pub mod async_impl;
#[cfg(feature = "blocking")]
pub mod blocking;
#[cfg(feature = "blocking")]
pub use crate::blocking::{Forward, Reverse};

mod address;
pub use crate::address::{Address, Location};

mod error;
pub use crate::error::GeocodingError;

// The Google Maps geocoding provider
pub mod google;
#[cfg(feature = "blocking")]
pub use crate::blocking::google::Google;
