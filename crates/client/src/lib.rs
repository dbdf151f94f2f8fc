//! # Slotbook API Client
//!
//! HTTP access to the booking platform backend. The crate exposes:
//!
//! - [`ApiClient`]: a thin reqwest wrapper holding the base URL, request
//!   timeout, and an optional [`TokenProvider`] that supplies the bearer
//!   token for authenticated calls.
//! - [`resources`]: one module per backend resource (slots, services,
//!   records, users, notifications) with free async functions over a
//!   client reference.
//! - [`BookingApi`]: the collaborator contract the view layer consumes,
//!   implemented by [`ApiClient`] and mocked under [`mock`] for tests.
//!
//! List endpoints are envelope-tolerant: the backend has served both bare
//! arrays and wrapped `{"data": [...]}` payloads, and both decode.

pub mod config;
pub mod error;
pub mod mock;
pub mod resources;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use slotbook_core::models::record::{CreateRecordRequest, Record};
use slotbook_core::models::service::Service;
use slotbook_core::models::slot::Slot;
use slotbook_core::models::user::PublicProfile;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Supplies the bearer token attached to every request, when one exists.
/// The session service implements this; requests go out anonymous until a
/// session is set.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Shared HTTP client for the booking backend. Construct one per process
/// and share it behind an `Arc`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens: None,
        })
    }

    /// Attaches a token source; subsequent requests carry its bearer token.
    pub fn with_tokens(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.tokens.as_ref().and_then(|t| t.bearer_token()) {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn post_json<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::POST, path).send().await?;
        Self::expect_success(response).await.map(|_| ())
    }

    pub(crate) async fn put_json<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::expect_success(response).await.map(|_| ())
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::expect_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::Decode(format!("{path}: {err}")))
    }

    /// Maps non-success statuses into the error taxonomy; 401 is special
    /// so the session layer can react to an expired token.
    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error::classify_failure(status.as_u16(), &body))
    }
}

/// The collaborator contract the view layer depends on. [`ApiClient`] is
/// the production implementation; tests use [`mock::backend::MockBackend`].
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// All slots for a master, any status, any time. The reference is the
    /// opaque public-page identifier (the master's UUID in practice).
    async fn slots_for_master(&self, master: &str) -> Result<Vec<Slot>, ApiError>;

    async fn services_for_master(&self, master_id: Uuid) -> Result<Vec<Service>, ApiError>;

    /// All records ever created by this client, any status.
    async fn records_for_client(&self, client_id: Uuid) -> Result<Vec<Record>, ApiError>;

    /// Fails with [`ApiError::DuplicateBooking`] when an active record
    /// already exists for the (slot, client) pair.
    async fn create_record(&self, request: CreateRecordRequest) -> Result<Record, ApiError>;

    async fn public_profile(&self, master: &str) -> Result<PublicProfile, ApiError>;

    async fn unread_notifications(&self) -> Result<u64, ApiError>;
}

#[async_trait]
impl BookingApi for ApiClient {
    async fn slots_for_master(&self, master: &str) -> Result<Vec<Slot>, ApiError> {
        resources::slot::slots_for_master(self, master).await
    }

    async fn services_for_master(&self, master_id: Uuid) -> Result<Vec<Service>, ApiError> {
        resources::service::services_for_master(self, master_id).await
    }

    async fn records_for_client(&self, client_id: Uuid) -> Result<Vec<Record>, ApiError> {
        resources::record::records_for_client(self, client_id).await
    }

    async fn create_record(&self, request: CreateRecordRequest) -> Result<Record, ApiError> {
        resources::record::create_record(self, &request).await
    }

    async fn public_profile(&self, master: &str) -> Result<PublicProfile, ApiError> {
        resources::user::public_profile(self, master).await
    }

    async fn unread_notifications(&self) -> Result<u64, ApiError> {
        resources::notification::unread_count(self).await
    }
}
