//! `/v1/reference-data/locations/pois` endpoints.

mod by_square;

pub use by_square::{BySquare, PoiSquare};

use url::Url;

use crate::client::{Client, Params, Response};
use crate::error::{Error, Result};

pub(crate) const POIS_PATH: &str = "/v1/reference-data/locations/pois";

/// Only used to borrow `url`'s path-segment encoding
const SEGMENT_BASE: &str = "http://localhost";

/// Nearby search centered on a coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoiSearch {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in kilometers
    pub radius: Option<f64>,
}

impl PoiSearch {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: None,
        }
    }

    pub fn radius(mut self, radius_km: f64) -> Self {
        self.radius = Some(radius_km);
        self
    }
}

impl From<PoiSearch> for Params {
    fn from(search: PoiSearch) -> Self {
        let mut params = Params::new()
            .with("latitude", search.latitude)
            .with("longitude", search.longitude);
        if let Some(radius) = search.radius {
            params.insert("radius", radius);
        }
        params
    }
}

/// Points of interest, either one by id or a nearby search.
///
/// ```no_run
/// # async fn run(amadeus: amadeus_pois::Amadeus) -> amadeus_pois::Result<()> {
/// use amadeus_pois::PoiSearch;
///
/// // Near Barcelona
/// let nearby = amadeus
///     .reference_data()
///     .locations()
///     .points_of_interest()
///     .get(PoiSearch::new(41.397158, 2.160873))
///     .await?;
///
/// // A single POI
/// let one = amadeus
///     .reference_data()
///     .locations()
///     .point_of_interest("9CB40CB5D0")
///     .get(())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PointsOfInterest<'a> {
    client: &'a Client,
    poi_id: Option<String>,
}

impl<'a> PointsOfInterest<'a> {
    /// An empty id behaves like no id at all.
    pub(crate) fn new(client: &'a Client, poi_id: Option<String>) -> Self {
        Self {
            client,
            poi_id: poi_id.filter(|id| !id.is_empty()),
        }
    }

    pub fn by_square(&self) -> BySquare<'a> {
        BySquare::new(self.client)
    }

    pub fn poi_id(&self) -> Option<&str> {
        self.poi_id.as_deref()
    }

    /// With an id, fetch that POI and ignore `params`; otherwise search
    /// nearby, forwarding `params` (`latitude`, `longitude`, `radius`) as is.
    pub async fn get(&self, params: impl Into<Params>) -> Result<Response> {
        let (path, params) = self.route(params.into())?;
        self.client.get(&path, &params).await
    }

    fn route(&self, params: Params) -> Result<(String, Params)> {
        match &self.poi_id {
            Some(id) => Ok((poi_path(id)?, Params::new())),
            None => Ok((POIS_PATH.to_string(), params)),
        }
    }
}

/// `/pois/{id}` with the id encoded as exactly one path segment
fn poi_path(id: &str) -> Result<String> {
    let mut url = Url::parse(&format!("{}{}", SEGMENT_BASE, POIS_PATH))
        .map_err(|e| Error::Config(format!("invalid POI path: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| Error::Config("POI path cannot take segments".into()))?
        .push(id);
    Ok(url.path().to_string())
}
