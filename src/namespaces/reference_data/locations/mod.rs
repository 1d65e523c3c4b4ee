//! `/v1/reference-data/locations` namespace.

pub mod points_of_interest;

pub use points_of_interest::{BySquare, PoiSearch, PoiSquare, PointsOfInterest};

use crate::client::Client;

#[derive(Clone)]
pub struct Locations<'a> {
    client: &'a Client,
}

impl<'a> Locations<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Nearby search accessor
    pub fn points_of_interest(&self) -> PointsOfInterest<'a> {
        PointsOfInterest::new(self.client, None)
    }

    /// Accessor bound to a single POI id
    pub fn point_of_interest(&self, poi_id: impl Into<String>) -> PointsOfInterest<'a> {
        PointsOfInterest::new(self.client, Some(poi_id.into()))
    }
}
