//! Error types for the Xero client.
//!
//! - [`ApiError`] - Every fault the client raises to its caller
//! - [`ErrorCategory`] - The coarse class an [`ApiError`] belongs to
//! - [`ErrorReport`] - Serializable snapshot of an [`ApiError`]
//! - [`DocumentError`] - Failures while querying a parsed response document

mod api_error;
mod category;
mod document_error;
mod report;

pub use api_error::ApiError;
pub use category::ErrorCategory;
pub use document_error::DocumentError;
pub use report::ErrorReport;

/// Convenience Result type for Xero client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
