//! Parsed-document query errors.

use thiserror::Error;

/// Errors while querying a parsed response document.
///
/// These never reach the caller of [`ApiError::validation_errors`](super::ApiError::validation_errors);
/// they select its fallback path. They are public so that third-party
/// [`ResponseDocument`](crate::ResponseDocument) implementations can report
/// their own failures.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No parsed document was attached to the error.
    #[error("No parsed response document available")]
    Missing,

    /// The response body is not valid UTF-8.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The response body is not well-formed XML.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The document implementation could not answer the query.
    #[error("Query for <{element}> failed: {message}")]
    Query {
        /// The element name that was queried.
        element: String,
        /// Description of the failure.
        message: String,
    },
}

impl DocumentError {
    /// Creates a query failure for the given element name.
    pub fn query(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Query {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the document exists but could not be parsed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidUtf8(_) | Self::XmlParse(_))
    }
}
