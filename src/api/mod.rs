//! API Client Adapter
//!
//! Thin wrapper over `gloo_net` with the backend base address, a fixed
//! request timeout, and bearer-token injection. The token is read from
//! localStorage on every outgoing request, so a refresh between requests is
//! honored. Endpoint wrappers are organized by domain in the submodules.

mod document;
mod project;
mod task;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Method, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Fixed per-request timeout, matching the deployment's HTTP-client config.
pub const REQUEST_TIMEOUT_MS: u32 = 5_000;

/// localStorage key holding the bearer token.
const TOKEN_KEY: &str = "token";

/// Base address, fixed at build time (`MES_API_URL`); empty means
/// same-origin relative paths.
fn base_url() -> &'static str {
    option_env!("MES_API_URL").unwrap_or("")
}

/// Read the bearer token fresh from persisted client storage.
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", base_url(), path);
        let mut builder = RequestBuilder::new(&url).method(method);
        // Token read at send time, not cached at client construction
        if let Some(token) = stored_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        builder
    }

    /// Race the request against the fixed timeout. A timeout is reported as
    /// its own kind, distinguishable from a server-returned error.
    async fn send(&self, request: gloo_net::http::Request) -> Result<Response, ApiError> {
        let fut = request.send();
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(fut);
        pin_mut!(timeout);
        let response = match select(fut, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => return Err(ApiError::Timeout),
        };
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server { status, message })
        }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .builder(Method::GET, path)
            .build()
            .map_err(|e| ApiError::Unknown(e.to_string()))?;
        let response = self.send(request).await?;
        self.decode(response).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .builder(Method::POST, path)
            .json(body)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.send(request).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .builder(Method::PUT, path)
            .json(body)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.send(request).await?;
        Ok(())
    }

    /// POST with an empty body (e.g. authority grants).
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .builder(Method::POST, path)
            .build()
            .map_err(|e| ApiError::Unknown(e.to_string()))?;
        self.send(request).await?;
        Ok(())
    }

    /// Multipart POST. The browser sets the multipart boundary header itself.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .builder(Method::POST, path)
            .body(form.clone())
            .map_err(|e| ApiError::Unknown(e.to_string()))?;
        let response = self.send(request).await?;
        self.decode(response).await
    }
}
