//! HTTP client for the holidays service.
//!
//! Mirrors the server's wire contract so remote callers observe the same
//! error semantics as in-process callers.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    models::{Holiday, HolidayPayload, PaginationEnvelope, ServiceErrorBody},
    services::PageRequest,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Bad request: {}", .0.message)]
    BadRequest(ServiceErrorBody),

    #[error("Not found: {}", .0.message)]
    NotFound(ServiceErrorBody),

    #[error("Server error (HTTP {status}): {}", .body.message)]
    Server { status: u16, body: ServiceErrorBody },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Clone)]
pub struct HolidayClient {
    base_url: String,
    http: Client,
}

impl HolidayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// POST /holidays
    pub async fn create(&self, payload: &HolidayPayload) -> ClientResult<Holiday> {
        let response = self
            .http
            .post(self.url("/holidays"))
            .json(payload)
            .send()
            .await?;

        decode(response).await
    }

    /// GET /holidays, unpaged when no page request is given.
    pub async fn find_all(
        &self,
        page: Option<&PageRequest>,
    ) -> ClientResult<PaginationEnvelope<Holiday>> {
        let mut request = self.http.get(self.url("/holidays"));

        if let Some(page) = page {
            request = request.query(&page.query_pairs());
        }

        decode(request.send().await?).await
    }

    /// GET /holidays/{id}
    pub async fn get(&self, id: i64) -> ClientResult<Holiday> {
        let response = self
            .http
            .get(self.url(&format!("/holidays/{}", id)))
            .send()
            .await?;

        decode(response).await
    }

    /// PATCH /holidays/{id}
    pub async fn patch(&self, id: i64, payload: &HolidayPayload) -> ClientResult<Holiday> {
        let response = self
            .http
            .patch(self.url(&format!("/holidays/{}", id)))
            .json(payload)
            .send()
            .await?;

        decode(response).await
    }

    /// DELETE /holidays/{id}
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/holidays/{}", id)))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_for(response).await)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(error_for(response).await)
    }
}

async fn error_for(response: Response) -> ClientError {
    let status = response.status();
    let body = response
        .json::<ServiceErrorBody>()
        .await
        .unwrap_or_else(|_| ServiceErrorBody::new(None, format!("HTTP {} error", status)));

    match status {
        StatusCode::BAD_REQUEST => ClientError::BadRequest(body),
        StatusCode::NOT_FOUND => ClientError::NotFound(body),
        _ => ClientError::Server {
            status: status.as_u16(),
            body,
        },
    }
}
