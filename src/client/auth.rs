//! OAuth2 client-credentials token, fetched lazily and cached.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::Response;
use crate::error::{Error, Result};

pub(crate) const TOKEN_PATH: &str = "/v1/security/oauth2/token";

/// Refresh this long before the server-side expiry
const EXPIRY_MARGIN_SECS: i64 = 10;

/// Upper bound on the lifetime accepted from the token endpoint
const MAX_LIFETIME_SECS: i64 = 86_400;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

#[derive(Clone)]
pub(crate) struct AccessToken {
    http: reqwest::Client,
    url: String,
    client_id: String,
    client_secret: String,
    cached: Arc<Mutex<Option<CachedToken>>>,
}

impl AccessToken {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Self {
        Self {
            http,
            url: format!("{}{}", base_url, TOKEN_PATH),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// `Authorization` header value, refreshing the token if needed.
    ///
    /// The lock is held across the refresh so concurrent callers wait for
    /// one token request instead of issuing their own.
    pub(crate) async fn bearer(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
            return Ok(format!("Bearer {}", token.value));
        }

        let token = self.fetch().await?;
        let header = format!("Bearer {}", token.value);
        *cached = Some(token);
        Ok(header)
    }

    async fn fetch(&self) -> Result<CachedToken> {
        info!("Requesting access token from {}", self.url);

        let response = self
            .http
            .post(&self.url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;
        let response = Response::read(response).await?;

        if !response.is_success() {
            return Err(match Error::from_response(response) {
                // Any refusal of the credentials is an authentication failure.
                Error::Client(r) | Error::NotFound(r) => Error::Authentication(r),
                other => other,
            });
        }

        let token: TokenResponse = match response.parse_result() {
            Ok(token) => token,
            Err(_) => return Err(Error::Authentication(Box::new(response))),
        };

        let lifetime = token.expires_in.clamp(0, MAX_LIFETIME_SECS);
        let expires_at =
            Duration::try_seconds(lifetime).and_then(|d| Utc::now().checked_add_signed(d));
        let Some(expires_at) = expires_at else {
            return Err(Error::Authentication(Box::new(response)));
        };
        debug!("Access token valid for {}s", lifetime);

        Ok(CachedToken {
            value: token.access_token,
            expires_at,
        })
    }
}
