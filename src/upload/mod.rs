// SPDX-License-Identifier: MPL-2.0
//! Transient state and validation for the image upload form.
//!
//! A [`Draft`] lives only while the form modal is open. Field rules run
//! entirely on the client; a draft that fails validation never produces a
//! network call.

mod draft;
pub mod validate;

pub use draft::{Draft, SelectedFile};
pub use validate::{Field, FieldError};
