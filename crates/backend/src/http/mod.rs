//! HTTP adapter for the hosted backend (PostgREST-style data API plus
//! edge functions). The backend schema, row-level security, and function
//! internals are a black box; this module only speaks the interfaces in
//! `repository`.

use std::env;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::repository::BackendError;

mod notes;
mod payments;
mod progress;

/// Connection settings for the hosted backend.
#[derive(Clone, Debug)]
pub struct HttpBackendConfig {
    /// Base URL of the data API, e.g. `https://project.example.co`.
    pub base_url: String,
    /// Publishable API key, sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl HttpBackendConfig {
    /// Read `NOTES_API_URL` and `NOTES_API_KEY`. Returns `None` when either
    /// is missing or blank, which callers treat as "run against the
    /// in-memory backend instead".
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("NOTES_API_URL").ok()?;
        let api_key = env::var("NOTES_API_KEY").ok()?;
        if base_url.trim().is_empty() || api_key.trim().is_empty() {
            return None;
        }
        Some(Self { base_url, api_key })
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpInitError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// `reqwest`-backed implementation of the backend repositories.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
}

impl HttpBackend {
    /// Build a client for the given backend.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the HTTP client cannot be constructed.
    pub fn connect(config: HttpBackendConfig) -> Result<Self, HttpInitError> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self { client, config })
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url.trim_end_matches('/'))
    }

    fn function_url(&self, name: &str) -> String {
        format!(
            "{}/functions/v1/{name}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.config.api_key)
            .header("apikey", &self.config.api_key)
    }

    /// GET rows from a table with a query string, decoding the JSON array.
    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .authed(self.client.get(self.rest_url(table)).query(query))
            .send()
            .await
            .map_err(connection)?;
        let response = check_status(response)?;
        response.json::<Vec<T>>().await.map_err(serialization)
    }

    /// Upsert one row into a table, merging on the table's conflict key.
    async fn upsert_row<T: serde::Serialize>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<(), BackendError> {
        let response = self
            .authed(self.client.post(self.rest_url(table)).json(row))
            .header("Prefer", "resolution=merge-duplicates")
            .send()
            .await
            .map_err(connection)?;
        check_status(response)?;
        Ok(())
    }

    async fn call_function<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        name: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .authed(self.client.post(self.function_url(name)).json(body))
            .send()
            .await
            .map_err(connection)?;
        let response = check_status(response)?;
        response.json::<T>().await.map_err(serialization)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BackendError::Unauthorized),
        StatusCode::NOT_FOUND => Err(BackendError::NotFound),
        StatusCode::CONFLICT => Err(BackendError::Conflict),
        status => Err(BackendError::Connection(format!("http status {status}"))),
    }
}

fn connection(e: reqwest::Error) -> BackendError {
    BackendError::Connection(e.to_string())
}

fn serialization(e: reqwest::Error) -> BackendError {
    BackendError::Serialization(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_url_tolerates_trailing_slash() {
        let backend = HttpBackend::connect(HttpBackendConfig {
            base_url: "https://project.example.co/".to_string(),
            api_key: "key".to_string(),
        })
        .unwrap();
        assert_eq!(
            backend.rest_url("lesson_notes"),
            "https://project.example.co/rest/v1/lesson_notes"
        );
        assert_eq!(
            backend.function_url("create-checkout"),
            "https://project.example.co/functions/v1/create-checkout"
        );
    }
}
