//! Typed records for the `data` member of API responses.

pub mod point_of_interest;

pub use point_of_interest::{Category, GeoCode, PointOfInterest, SelfLink};
