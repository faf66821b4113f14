//! REST client for the sign-in and sign-up endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the HTTP client reports a network
//! error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are kept apart in `AuthError` so the
//! submission controller never has to assume a response exists.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, TokenResponse};
use crate::config::AppConfig;
use crate::error::AuthError;
use crate::state::sign::SignMode;

/// Capability for exchanging credentials for a session token.
pub trait AuthClient {
    /// POST `credentials` to the endpoint for `mode`.
    fn authenticate(
        &self,
        mode: SignMode,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenResponse, AuthError>>;
}

/// `AuthClient` backed by the browser fetch API.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    config: AppConfig,
}

impl HttpAuthClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Absolute URL for the endpoint of `mode`.
    pub fn url(&self, mode: SignMode) -> String {
        self.config.endpoint(mode.endpoint())
    }
}

impl AuthClient for HttpAuthClient {
    async fn authenticate(
        &self,
        mode: SignMode,
        credentials: &Credentials,
    ) -> Result<TokenResponse, AuthError> {
        let url = self.url(mode);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| AuthError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Status(resp.status()));
            }
            resp.json::<TokenResponse>()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(AuthError::Network("not available on server".to_owned()))
        }
    }
}
