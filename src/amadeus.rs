use crate::client::Client;
use crate::config::Config;
use crate::error::Result;
use crate::namespaces::ReferenceData;

/// Entry point of the SDK.
///
/// ```no_run
/// # fn run() -> amadeus_pois::Result<()> {
/// let amadeus = amadeus_pois::Amadeus::from_env()?;
/// let pois = amadeus.reference_data().locations().points_of_interest();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Amadeus {
    client: Client,
}

impl Amadeus {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(config)?,
        })
    }

    /// Build from `AMADEUS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn reference_data(&self) -> ReferenceData<'_> {
        ReferenceData::new(&self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointOfInterest;
    use crate::test_support::{mock_token, test_config};
    use crate::PoiSearch;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_nearby_search_end_to_end() {
        let server = MockServer::start();
        let token = mock_token(&server);
        server.mock(|when, then| {
            when.method(GET)
                .path("/v1/reference-data/locations/pois")
                .query_param("latitude", "41.397158")
                .query_param("longitude", "2.160873");
            then.status(200)
                .header("content-type", "application/vnd.amadeus+json")
                .body(
                    r#"{"meta":{"count":2},"data":[
                        {"type":"location","subType":"POINT_OF_INTEREST","id":"9CB40CB5D0","geoCode":{"latitude":41.39165,"longitude":2.164772},"name":"Casa Batlló","category":"SIGHTS","rank":5,"tags":["sightseeing"]},
                        {"type":"location","subType":"POINT_OF_INTEREST","id":"5F1CBE3C19","geoCode":{"latitude":41.392395,"longitude":2.162299},"name":"Tapas 24","category":"RESTAURANT","rank":100,"tags":["restaurant","tapas"]}
                    ]}"#,
                );
        });

        let amadeus = Amadeus::new(&test_config(&server)).unwrap();
        let pois = amadeus.reference_data().locations().points_of_interest();

        let first = pois.get(PoiSearch::new(41.397158, 2.160873)).await.unwrap();
        let second = pois.get(PoiSearch::new(41.397158, 2.160873)).await.unwrap();

        let places: Vec<PointOfInterest> = first.parse_data().unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[1].name, "Tapas 24");
        assert_eq!(second.status_code, 200);
        // token shared across requests
        assert_eq!(token.calls(), 1);
    }
}
