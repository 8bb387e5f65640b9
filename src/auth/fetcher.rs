use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use super::validator::{validate, Credential};
use crate::config::AuthConfig;

/// Failures surfaced to callers of the credential pipeline.
///
/// Validation failures and transport failures are all folded into
/// [`CredentialError::RefreshFailed`] so callers see one stable vocabulary;
/// the distinction only matters for diagnostics and is logged at the site
/// where it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The configured token endpoint URL does not parse. This is a shipped
    /// configuration fault, not a transient condition, and is detected at
    /// construction time.
    #[error("invalid token endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// The token exchange failed (transport error, malformed response, or
    /// expired token). Never retried here; the engine re-invokes as part of
    /// its own upload retry loop.
    #[error("access token refresh failed")]
    RefreshFailed,
}

#[derive(Debug, Clone, Serialize)]
struct TokenRequest {
    grant_type: String,
    client_id: String,
    client_secret: String,
    audience: String,
}

/// Performs the client-credentials exchange against the token endpoint.
///
/// One POST per [`CredentialFetcher::fetch`] call, no internal retries, no
/// caching. Holds no mutable state, so concurrent fetches are independent.
#[derive(Debug)]
pub struct CredentialFetcher {
    http: reqwest::Client,
    endpoint: reqwest::Url,
    request: TokenRequest,
}

impl CredentialFetcher {
    /// Build a fetcher from the auth configuration.
    ///
    /// The endpoint URL is parsed once here; a malformed URL fails fast with
    /// [`CredentialError::InvalidEndpoint`] rather than on first use.
    pub fn new(cfg: &AuthConfig) -> Result<Self, CredentialError> {
        let endpoint = reqwest::Url::parse(&cfg.token_url).map_err(|e| {
            error!("Token endpoint URL {:?} does not parse: {}", cfg.token_url, e);
            CredentialError::InvalidEndpoint(cfg.token_url.clone())
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            request: TokenRequest {
                grant_type: "client_credentials".to_string(),
                client_id: cfg.client_id.clone(),
                client_secret: cfg.client_secret.clone(),
                audience: cfg.audience.clone(),
            },
        })
    }

    /// Exchange the static client credentials for a bearer token.
    ///
    /// Exactly one network round trip. On success the returned credential's
    /// expiry is strictly in the future.
    pub async fn fetch(&self) -> Result<Credential, CredentialError> {
        debug!("Requesting access token from {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&self.request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to get data from access token request: {}", e);
                CredentialError::RefreshFailed
            })?;

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read access token response body: {}", e);
            CredentialError::RefreshFailed
        })?;

        let credential = validate(&body).map_err(|e| {
            error!("Token endpoint returned an unusable token: {}", e);
            CredentialError::RefreshFailed
        })?;

        debug!("Access token obtained, expires at {}", credential.expiry);

        Ok(credential)
    }
}
