// SPDX-License-Identifier: MPL-2.0
//! Client-side field rules for the upload form.
//!
//! Every rule is checked before any network call; each failure maps to a
//! field plus a localization key resolved through i18n at render time.

use super::draft::{Draft, SelectedFile};

/// Files at or above this size are rejected.
pub const MAX_IMAGE_BYTES: u64 = 10_000_000;

/// MIME types the gallery accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 12;
pub const DESCRIPTION_MAX_CHARS: usize = 20;

/// The form fields a rule can fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Image,
    Title,
    Description,
}

/// A field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    /// Localization key of the inline message.
    pub message_key: &'static str,
}

impl FieldError {
    fn new(field: Field, message_key: &'static str) -> Self {
        Self { field, message_key }
    }
}

/// Validates a whole draft. An empty result means the draft may be
/// submitted (once its image is hosted).
#[must_use]
pub fn validate(draft: &Draft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    errors.extend(validate_file(draft.file.as_ref()));
    errors.extend(validate_title(&draft.title));
    errors.extend(validate_description(&draft.description));
    errors
}

/// Image rules: required, under 10MB, PNG/JPEG/GIF only.
#[must_use]
pub fn validate_file(file: Option<&SelectedFile>) -> Option<FieldError> {
    let file = match file {
        Some(file) => file,
        None => return Some(FieldError::new(Field::Image, "validation-image-required")),
    };
    if file.size_bytes >= MAX_IMAGE_BYTES {
        return Some(FieldError::new(Field::Image, "validation-image-too-large"));
    }
    if !ACCEPTED_MIME_TYPES.contains(&file.mime.as_str()) {
        return Some(FieldError::new(Field::Image, "validation-image-format"));
    }
    None
}

/// Title rules: required, 2 to 12 characters.
#[must_use]
pub fn validate_title(title: &str) -> Option<FieldError> {
    if title.is_empty() {
        return Some(FieldError::new(Field::Title, "validation-title-required"));
    }
    // Lengths count Unicode scalar values, not bytes.
    let chars = title.chars().count();
    if chars < TITLE_MIN_CHARS {
        return Some(FieldError::new(Field::Title, "validation-title-min"));
    }
    if chars > TITLE_MAX_CHARS {
        return Some(FieldError::new(Field::Title, "validation-title-max"));
    }
    None
}

/// Description rules: required, at most 20 characters.
#[must_use]
pub fn validate_description(description: &str) -> Option<FieldError> {
    if description.is_empty() {
        return Some(FieldError::new(
            Field::Description,
            "validation-description-required",
        ));
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Some(FieldError::new(
            Field::Description,
            "validation-description-max",
        ));
    }
    None
}

/// First error for a given field, if any.
#[must_use]
pub fn error_for<'a>(errors: &'a [FieldError], field: Field) -> Option<&'a FieldError> {
    errors.iter().find(|e| e.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::I18n;
    use std::path::PathBuf;

    fn png(size_bytes: u64) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from("/tmp/image.png"),
            size_bytes,
            mime: "image/png".into(),
        }
    }

    fn valid_draft() -> Draft {
        Draft {
            file: Some(png(1024)),
            title: "sunset".into(),
            description: "over the bay".into(),
            hosted_url: None,
        }
    }

    fn pt_br() -> I18n {
        let config = Config {
            language: Some("pt-BR".to_string()),
            ..Config::default()
        };
        I18n::new(None, &config)
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn missing_image_is_required() {
        let err = validate_file(None).expect("missing file fails");
        assert_eq!(err.field, Field::Image);
        assert_eq!(err.message_key, "validation-image-required");
    }

    #[test]
    fn image_size_limit_is_exclusive() {
        assert!(validate_file(Some(&png(MAX_IMAGE_BYTES - 1))).is_none());

        let err = validate_file(Some(&png(MAX_IMAGE_BYTES))).expect("10MB fails");
        assert_eq!(err.message_key, "validation-image-too-large");
    }

    #[test]
    fn image_format_must_be_accepted() {
        let bmp = SelectedFile {
            path: PathBuf::from("/tmp/image.bmp"),
            size_bytes: 1024,
            mime: "image/bmp".into(),
        };
        let err = validate_file(Some(&bmp)).expect("bmp fails");
        assert_eq!(err.message_key, "validation-image-format");

        for mime in ACCEPTED_MIME_TYPES {
            let file = SelectedFile {
                path: PathBuf::from("/tmp/image"),
                size_bytes: 1024,
                mime: mime.into(),
            };
            assert!(validate_file(Some(&file)).is_none(), "{mime} should pass");
        }
    }

    #[test]
    fn empty_title_is_required() {
        let err = validate_title("").expect("empty title fails");
        assert_eq!(err.message_key, "validation-title-required");
        assert_eq!(
            pt_br().tr(err.message_key),
            "O campo título é obrigatório"
        );
    }

    #[test]
    fn two_character_title_is_valid() {
        assert!(validate_title("ab").is_none());
    }

    #[test]
    fn one_character_title_is_too_short() {
        let err = validate_title("a").expect("single char fails");
        assert_eq!(err.message_key, "validation-title-min");
        assert_eq!(pt_br().tr(err.message_key), "Mínimo 2 caracteres");
    }

    #[test]
    fn thirteen_character_title_is_too_long() {
        let err = validate_title("abcdefghijklm").expect("13 chars fail");
        assert_eq!(err.message_key, "validation-title-max");
        assert_eq!(pt_br().tr(err.message_key), "Máximo 12 caracteres");
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // 12 accented characters, well over 12 bytes.
        assert!(validate_title("ação marítim").is_none());
    }

    #[test]
    fn empty_description_is_required() {
        let err = validate_description("").expect("empty description fails");
        assert_eq!(err.message_key, "validation-description-required");
        assert_eq!(pt_br().tr(err.message_key), "A descrição é obrigatória");
    }

    #[test]
    fn description_over_twenty_characters_fails() {
        let err = validate_description("abcdefghijklmnopqrstu").expect("21 chars fail");
        assert_eq!(err.message_key, "validation-description-max");
        assert_eq!(pt_br().tr(err.message_key), "Máximo 20 caracteres");

        assert!(validate_description("abcdefghijklmnopqrst").is_none());
    }

    #[test]
    fn invalid_draft_collects_every_field() {
        let draft = Draft {
            file: None,
            title: String::new(),
            description: String::new(),
            hosted_url: None,
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 3);
        assert!(error_for(&errors, Field::Image).is_some());
        assert!(error_for(&errors, Field::Title).is_some());
        assert!(error_for(&errors, Field::Description).is_some());
    }
}
