// SPDX-License-Identifier: MPL-2.0
//! Reqwest-backed client for the image-storage API.

use super::error::ApiError;
use super::models::{CreateImageResponse, Cursor, ImagePage, ImageRecord, NewImage};
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Client for the remote image service.
///
/// Cheap to clone (the inner reqwest client is reference-counted), which is
/// how it travels into Iced tasks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new client against the given base address.
    ///
    /// The base address must not carry a trailing slash; config resolution
    /// guarantees this.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        log::info!(target: "api", "client created for {}", base_url);

        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches one page of the image list.
    ///
    /// Without a cursor this is the first page; with one, the page starting
    /// after it. The response's `after` field signals whether more pages
    /// exist.
    pub async fn list_images(&self, after: Option<&Cursor>) -> Result<ImagePage, ApiError> {
        let mut request = self.client.get(self.endpoint("/api/images"));
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor.as_str())]);
        }

        let response = request.send().await?;
        let page: ImagePage = Self::json_body(response).await?;
        log::debug!(
            target: "api",
            "listed {} images (more: {})",
            page.data.len(),
            page.after.is_some()
        );
        Ok(page)
    }

    /// Creates a new image record from an already-hosted URL.
    pub async fn create_image(&self, image: &NewImage) -> Result<ImageRecord, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/images"))
            .json(image)
            .send()
            .await?;
        let created: CreateImageResponse = Self::json_body(response).await?;
        log::info!(target: "api", "created image record {}", created.image.id);
        Ok(created.image)
    }

    /// Downloads raw image bytes, used by the grid and preview pipelines.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<unreadable body>"));
        log::warn!(target: "api", "request failed with status {status}: {body}");
        Err(ApiError::Status {
            code: status.as_u16(),
            body,
        })
    }

    async fn json_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
