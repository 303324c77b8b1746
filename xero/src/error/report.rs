//! Serializable error snapshots for logging and reporting layers.

use serde::{Deserialize, Serialize};

use super::ErrorCategory;

/// A detached, serializable view of an [`ApiError`](super::ApiError).
///
/// Built with [`ApiError::report`](super::ApiError::report). Unlike the error
/// itself it holds no reference to the parsed response, so it can be shipped
/// to a log sink or returned from a service as JSON.
///
/// ## Examples
///
/// ```rust
/// use xero::ApiError;
///
/// let report = ApiError::object_not_found("Contacts").report();
/// let json = serde_json::to_value(&report).unwrap();
///
/// assert_eq!(json["variant"], "ObjectNotFound");
/// assert_eq!(json["category"], "not_found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Variant name of the originating error.
    pub variant: String,
    /// Coarse class of the originating error.
    pub category: ErrorCategory,
    /// Diagnostic message.
    pub message: String,
    /// Discrete validation complaints, or the message alone.
    pub validation_errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{ApiError, XmlDocument};

    use super::*;

    #[test]
    fn test_report_collects_validation_errors() {
        let body = "<ApiException><ValidationError> Contact name is required </ValidationError></ApiException>";
        let err = ApiError::generic(
            "ValidationException",
            "A validation exception occurred",
            body,
            Some(Arc::new(XmlDocument::new(body))),
            "",
        );

        let report = err.report();
        assert_eq!(report.variant, "Generic");
        assert_eq!(report.category, ErrorCategory::Response);
        assert_eq!(report.validation_errors, vec!["Contact name is required"]);
    }

    #[test]
    fn test_report_json_shape() {
        let report = ApiError::method_not_allowed("Payment", "save").report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "variant": "MethodNotAllowed",
                "category": "client_misuse",
                "message": "Method save not allowed on Payment",
                "validation_errors": ["Method save not allowed on Payment"],
            })
        );
    }

    #[test]
    fn test_report_deserializes() {
        let original = ApiError::RecordInvalid.report();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ErrorReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
