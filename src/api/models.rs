// SPDX-License-Identifier: MPL-2.0
//! Wire types exchanged with the image-storage API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque pagination token returned by the list endpoint.
///
/// The client never inspects the token; it only hands it back verbatim as
/// the `after` query parameter of the next page request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored image record. Immutable once created; the id is assigned by
/// the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// One page of the image list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePage {
    pub data: Vec<ImageRecord>,
    /// Present iff more records exist after this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Cursor>,
}

/// Payload of the create-record call. The `url` must already point at the
/// hosted image binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewImage {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Envelope of the create-record response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateImageResponse {
    pub image: ImageRecord,
}
