//! Shared HTTP client used by every namespace.

mod auth;
mod params;
mod response;

pub use params::Params;
pub use response::{ApiError, ApiErrorSource, Response};

use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use auth::AccessToken;

const ACCEPT_JSON: &str = "application/json, application/vnd.amadeus+json";

/// Authenticated client for the Amadeus REST API.
///
/// Cheap to clone; clones share the connection pool and the token cache.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: AccessToken,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url();
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let token = AccessToken::new(
            http.clone(),
            &base_url,
            &config.client_id,
            &config.client_secret,
        );

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticated GET of `path` with `params` as the query string.
    ///
    /// Non-2xx answers come back as the matching [`Error`] variant.
    pub async fn get(&self, path: &str, params: &Params) -> Result<Response> {
        let url = self.url(path, params)?;
        let bearer = self.token.bearer().await?;

        debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .header(AUTHORIZATION, bearer)
            .header(ACCEPT, ACCEPT_JSON)
            .send()
            .await?;
        let response = Response::read(response).await?;

        response.into_result().inspect_err(|e| {
            warn!("GET {} failed: {}", url, e);
        })
    }

    pub(crate) fn url(&self, path: &str, params: &Params) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| Error::Config(format!("invalid request path '{}': {}", path, e)))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }
}
