use crate::client::{Client, Params, Response};
use crate::error::Result;

use super::POIS_PATH;

/// Bounding square, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoiSquare {
    pub north: f64,
    pub west: f64,
    pub south: f64,
    pub east: f64,
}

impl From<PoiSquare> for Params {
    fn from(square: PoiSquare) -> Self {
        Params::new()
            .with("north", square.north)
            .with("west", square.west)
            .with("south", square.south)
            .with("east", square.east)
    }
}

/// `/v1/reference-data/locations/pois/by-square`
#[derive(Clone)]
pub struct BySquare<'a> {
    client: &'a Client,
}

impl<'a> BySquare<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Points of interest inside the square, params forwarded as is
    pub async fn get(&self, params: impl Into<Params>) -> Result<Response> {
        self.client
            .get(&format!("{}/by-square", POIS_PATH), &params.into())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mock_token, test_client};
    use httpmock::prelude::*;

    #[test]
    fn test_square_params_order() {
        let params = Params::from(PoiSquare {
            north: 41.397158,
            west: 2.160873,
            south: 41.394582,
            east: 2.177181,
        });
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["north", "west", "south", "east"]);
        assert_eq!(params.get("east"), Some("2.177181"));
    }

    #[tokio::test]
    async fn test_get_forwards_bounds() {
        let server = MockServer::start();
        mock_token(&server);
        let api = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/reference-data/locations/pois/by-square")
                .query_param("north", "41.397158")
                .query_param("west", "2.160873")
                .query_param("south", "41.394582")
                .query_param("east", "2.177181");
            then.status(200)
                .header("content-type", "application/vnd.amadeus+json")
                .body(r#"{"data":[{"type":"location","id":"AF57D529B2","name":"Casa Batlló"}]}"#);
        });

        let client = test_client(&server);
        let response = BySquare::new(&client)
            .get(PoiSquare {
                north: 41.397158,
                west: 2.160873,
                south: 41.394582,
                east: 2.177181,
            })
            .await
            .unwrap();

        assert_eq!(response.data.unwrap()[0]["id"], "AF57D529B2");
        api.assert();
    }
}
