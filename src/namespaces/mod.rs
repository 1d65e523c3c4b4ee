//! Namespaced accessors mirroring the API's URL hierarchy.

pub mod reference_data;

pub use reference_data::ReferenceData;
