use super::fetcher::{CredentialError, CredentialFetcher};
use crate::config::AuthConfig;

/// Token supplier seam for the capture engine.
///
/// The engine invokes this whenever an outbound request needs
/// authentication, possibly several times per upload if the network drops,
/// and possibly concurrently with an earlier invocation still in flight.
/// Each call resolves exactly once with either a token or an error.
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn provide_token(&self) -> Result<String, CredentialError>;
}

/// [`TokenProvider`] backed by machine-to-machine client credentials.
///
/// Every invocation performs a fresh exchange; nothing is cached, which
/// favors correctness over staleness. A layer that wants caching can wrap
/// this provider. Invocations share no mutable state, so concurrent calls
/// never race and carry no ordering guarantee relative to each other.
pub struct ClientCredentialsProvider {
    fetcher: CredentialFetcher,
}

impl ClientCredentialsProvider {
    pub fn new(cfg: &AuthConfig) -> Result<Self, CredentialError> {
        Ok(Self {
            fetcher: CredentialFetcher::new(cfg)?,
        })
    }
}

#[async_trait::async_trait]
impl TokenProvider for ClientCredentialsProvider {
    async fn provide_token(&self) -> Result<String, CredentialError> {
        let credential = self.fetcher.fetch().await?;
        Ok(credential.token)
    }
}
