// keg-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// Structured kind of a domain failure, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    MalformedChecksum,
    MalformedUrl,
    MissingInstallTarget,
    TemplateSubstitution,
    ChecksumMismatch,
    DuplicateIdentifier,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required field `{field}`")]
    #[diagnostic(
        code(keg::domain::missing_field),
        help("Declare `{field}` with a non-empty value inside the package block.")
    )]
    MissingField { field: String },

    #[error("Malformed checksum in `{field}`: {reason}")]
    #[diagnostic(
        code(keg::domain::checksum),
        help("Expected a 64-character hexadecimal SHA-256 digest.")
    )]
    MalformedChecksum { field: String, reason: String },

    #[error("Malformed URL in `{field}` ({value}): {reason}")]
    #[diagnostic(
        code(keg::domain::url),
        help("Use an absolute URL; `url-template` must contain the `{{version}}` placeholder.")
    )]
    MalformedUrl {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No `{field}` declared")]
    #[diagnostic(
        code(keg::domain::install_target),
        help("Add at least one `install-target \"<bundle>\"` line.")
    )]
    MissingInstallTarget { field: String },

    #[error("Cannot substitute version into `{field}` ({template}): {reason}")]
    #[diagnostic(code(keg::domain::template))]
    TemplateSubstitution {
        field: String,
        template: String,
        reason: String,
    },

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    #[diagnostic(
        code(keg::domain::checksum_mismatch),
        help("The artifact does not match the manifest. Do not install it.")
    )]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Duplicate package identifier `{identifier}` in {first} and {second}")]
    #[diagnostic(code(keg::domain::duplicate_identifier))]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::MalformedChecksum { .. } => ErrorKind::MalformedChecksum,
            Self::MalformedUrl { .. } => ErrorKind::MalformedUrl,
            Self::MissingInstallTarget { .. } => ErrorKind::MissingInstallTarget,
            Self::TemplateSubstitution { .. } => ErrorKind::TemplateSubstitution,
            Self::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            Self::DuplicateIdentifier { .. } => ErrorKind::DuplicateIdentifier,
        }
    }

    /// Name of the manifest field at fault, when the failure concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::MalformedChecksum { field, .. }
            | Self::MalformedUrl { field, .. }
            | Self::MissingInstallTarget { field }
            | Self::TemplateSubstitution { field, .. } => Some(field),
            Self::ChecksumMismatch { .. } | Self::DuplicateIdentifier { .. } => None,
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_field() {
        let err = DomainError::MalformedChecksum {
            field: "checksum".to_string(),
            reason: "too short".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MalformedChecksum);
        assert_eq!(err.field(), Some("checksum"));

        let err = DomainError::ChecksumMismatch {
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Checksum mismatch: expected aa, got bb");
    }
}
