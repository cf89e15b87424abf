// SPDX-License-Identifier: MPL-2.0
//! File-hosting collaborator.
//!
//! Before a record can be created, the raw image must be hosted somewhere
//! public. The hosting service is an external collaborator with a minimal
//! assumed contract: it accepts a file and answers with a public URL. The
//! [`ImageHost`] trait is the seam; [`HttpImageHost`] implements it as a
//! multipart POST against a configurable endpoint.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors produced while hosting an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The file could not be read from disk.
    Io(String),
    /// The upload request never produced a response.
    Network(String),
    /// The hosting service answered with a non-success status.
    Status { code: u16, body: String },
    /// The hosting service's response did not contain a URL.
    Decode(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Io(msg) => write!(f, "could not read file: {msg}"),
            HostError::Network(msg) => write!(f, "upload failed: {msg}"),
            HostError::Status { code, body } => {
                write!(f, "hosting service responded with status {code}: {body}")
            }
            HostError::Decode(msg) => write!(f, "hosting service returned no URL: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

impl From<reqwest::Error> for HostError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HostError::Decode(err.to_string())
        } else {
            HostError::Network(err.to_string())
        }
    }
}

/// External file-hosting collaborator: takes a file, returns a public URL.
pub trait ImageHost {
    /// Uploads the file at `path` and resolves to its public URL.
    ///
    /// The returned future must own everything it needs so it can be driven
    /// from a background task.
    fn upload(&self, path: PathBuf) -> impl Future<Output = Result<String, HostError>> + Send + 'static;
}

/// Shape of the hosting service's response.
#[derive(Debug, Deserialize)]
struct HostedFile {
    url: String,
}

/// Multipart-upload implementation of [`ImageHost`].
#[derive(Debug, Clone)]
pub struct HttpImageHost {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpImageHost {
    pub fn new(upload_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            upload_url: upload_url.into(),
        }
    }
}

impl ImageHost for HttpImageHost {
    fn upload(&self, path: PathBuf) -> impl Future<Output = Result<String, HostError>> + Send + 'static {
        let client = self.client.clone();
        let upload_url = self.upload_url.clone();

        async move {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| HostError::Io(e.to_string()))?;

            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| String::from("image"));
            let mime = mime_guess::from_path(&path).first_or_octet_stream();

            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(mime.as_ref())
                .map_err(|e| HostError::Decode(e.to_string()))?;
            let form = reqwest::multipart::Form::new().part("file", part);

            let response = client.post(&upload_url).multipart(form).send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("<unreadable body>"));
                log::warn!(target: "api", "upload failed with status {status}: {body}");
                return Err(HostError::Status {
                    code: status.as_u16(),
                    body,
                });
            }

            let hosted: HostedFile = response
                .json()
                .await
                .map_err(|e| HostError::Decode(e.to_string()))?;
            log::info!(target: "api", "hosted image at {}", hosted.url);
            Ok(hosted.url)
        }
    }
}
