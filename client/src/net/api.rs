//! REST API helpers for the family-registry backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session's
//! bearer token attached to every request.
//! Server-side (SSR): requests resolve to `ApiError::Unavailable`; pages only
//! fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx statuses and bodies that
//! do not decode are failures, never panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Envelope, LinkType, Member, Payload};
use crate::config::ClientConfig;
use crate::state::auth::{AuthState, Role};

pub const MEMBER_LIST_ENDPOINT: &str = "/user/member/tous";
pub const LINK_TYPES_ENDPOINT: &str = "/user/type-de-lien/tous";

/// Detail endpoint for `id`, chosen by the viewer's role.
pub fn member_detail_endpoint(id: &str, role: &Role) -> String {
    if role.is_admin() {
        format!("/admin/member/details/{id}")
    } else {
        format!("/user/member/details/{id}")
    }
}

/// Authenticated HTTP client bound to one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    pub fn for_session(auth: &AuthState) -> Self {
        Self::new(ClientConfig::from_env(), auth.token.clone())
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// `Authorization` header value, if the session carries a token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Fetch every member visible to the viewer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a member list.
    pub async fn fetch_members(&self) -> Result<Vec<Member>, ApiError> {
        let body: Payload<Vec<Member>> = self.get_json(MEMBER_LIST_ENDPOINT).await?;
        Ok(body.into_inner())
    }

    /// Fetch one member record. `Ok(None)` means the server answered but had
    /// no record for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn fetch_member(&self, id: &str, role: &Role) -> Result<Option<Member>, ApiError> {
        let body: Envelope<Member> = self.get_json(&member_detail_endpoint(id, role)).await?;
        Ok(body.data)
    }

    /// Fetch the full link-type lookup set.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a link-type list.
    pub async fn fetch_link_types(&self) -> Result<Vec<LinkType>, ApiError> {
        let body: Payload<Vec<LinkType>> = self.get_json(LINK_TYPES_ENDPOINT).await?;
        Ok(body.into_inner())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path);
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(value) = self.authorization() {
                request = request.header("Authorization", &value);
            }
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let text = resp
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
