//! amadeus-pois - Points-of-interest client for the Amadeus travel API
//!
//! This library provides the shared authenticated client, the namespaced
//! accessors and the typed records used by the `pois` binary.

mod amadeus;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod namespaces;

pub use amadeus::Amadeus;
pub use client::{Client, Params, Response};
pub use config::{Config, Hostname, LogLevel};
pub use error::{Error, Result};
pub use models::{Category, GeoCode, PointOfInterest};
pub use namespaces::reference_data::locations::{BySquare, PoiSearch, PoiSquare, PointsOfInterest};
