// SPDX-License-Identifier: MPL-2.0
use crate::api::NewImage;
use std::path::PathBuf;

/// An image file picked from disk, with the attributes validation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// MIME type guessed from the file, e.g. `image/png`.
    pub mime: String,
}

/// In-progress upload form state.
///
/// Held only by the open form modal and destroyed when the modal closes.
/// `hosted_url` stays `None` until the hosting collaborator has accepted
/// the file; submission is blocked while it is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub file: Option<SelectedFile>,
    pub title: String,
    pub description: String,
    pub hosted_url: Option<String>,
}

impl Draft {
    #[must_use]
    pub fn has_hosted_url(&self) -> bool {
        self.hosted_url.is_some()
    }

    /// Builds the create-record payload, or `None` while the image has not
    /// been hosted yet.
    #[must_use]
    pub fn to_new_image(&self) -> Option<NewImage> {
        self.hosted_url.as_ref().map(|url| NewImage {
            title: self.title.clone(),
            description: self.description.clone(),
            url: url.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
