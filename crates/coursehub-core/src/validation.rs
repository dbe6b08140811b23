//! Type and size validation for uploaded learning materials.
//!
//! The declared MIME type is checked as soon as part headers are known; the
//! size is re-checked after every received chunk so an oversized part is
//! rejected before it is fully buffered.

use crate::constants::MAX_UPLOAD_SIZE_BYTES;
use crate::document_kind::DocumentKind;

/// Reason a file part was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Invalid file type: {mime_type}. Only PDF, Word, PowerPoint and plain text files are allowed")]
    UnsupportedType { mime_type: String },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: usize, max: usize },
}

/// Verdict for a single file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(DocumentKind),
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn into_result(self) -> Result<DocumentKind, Rejection> {
        match self {
            ValidationResult::Accepted(kind) => Ok(kind),
            ValidationResult::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Allow-list and size ceiling enforcement
#[derive(Debug, Clone, Copy)]
pub struct UploadValidator {
    max_file_size: usize,
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(MAX_UPLOAD_SIZE_BYTES)
    }
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    pub fn check_type(&self, content_type: &str) -> Result<DocumentKind, Rejection> {
        DocumentKind::from_mime(content_type).ok_or_else(|| Rejection::UnsupportedType {
            mime_type: content_type.to_string(),
        })
    }

    pub fn check_size(&self, size: usize) -> Result<(), Rejection> {
        if size > self.max_file_size {
            return Err(Rejection::TooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Type first, then size: the declared type is known before any body bytes arrive.
    pub fn validate(&self, content_type: &str, size: usize) -> ValidationResult {
        let kind = match self.check_type(content_type) {
            Ok(kind) => kind,
            Err(rejection) => return ValidationResult::Rejected(rejection),
        };
        match self.check_size(size) {
            Ok(()) => ValidationResult::Accepted(kind),
            Err(rejection) => ValidationResult::Rejected(rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: usize = 1024 * 1024;

    #[test]
    fn accepts_every_allowed_type_up_to_the_ceiling() {
        let validator = UploadValidator::default();
        for kind in DocumentKind::ALL {
            for size in [0, 1, 10 * MIB, MAX_UPLOAD_SIZE_BYTES] {
                assert_eq!(
                    validator.validate(kind.mime_type(), size),
                    ValidationResult::Accepted(kind),
                    "{} at {} bytes",
                    kind,
                    size
                );
            }
        }
    }

    #[test]
    fn rejects_unlisted_types_regardless_of_size() {
        let validator = UploadValidator::default();
        for mime in ["application/zip", "image/png", "text/html", "application/octet-stream"] {
            for size in [0, 10 * MIB, MAX_UPLOAD_SIZE_BYTES + 1] {
                assert_eq!(
                    validator.validate(mime, size),
                    ValidationResult::Rejected(Rejection::UnsupportedType {
                        mime_type: mime.to_string()
                    })
                );
            }
        }
    }

    #[test]
    fn rejects_oversized_payloads_for_every_allowed_type() {
        let validator = UploadValidator::default();
        for kind in DocumentKind::ALL {
            let result = validator.validate(kind.mime_type(), MAX_UPLOAD_SIZE_BYTES + 1);
            assert_eq!(
                result,
                ValidationResult::Rejected(Rejection::TooLarge {
                    size: MAX_UPLOAD_SIZE_BYTES + 1,
                    max: MAX_UPLOAD_SIZE_BYTES,
                })
            );
        }
    }

    #[test]
    fn unsupported_type_message_names_the_mime_type() {
        let rejection = UploadValidator::default()
            .check_type("application/zip")
            .unwrap_err();
        assert!(rejection.to_string().contains("application/zip"));
    }

    #[test]
    fn custom_ceiling_is_honoured() {
        let validator = UploadValidator::new(10);
        assert!(validator.check_size(10).is_ok());
        assert!(validator.check_size(11).is_err());
        assert!(validator.validate("application/pdf", 11).into_result().is_err());
    }
}
