//! Error vocabulary for a Xero accounting API client.
//!
//! The transport layer (HTTP, signing, model mapping) lives elsewhere. This
//! crate defines the values it raises when something goes wrong, and the
//! small seams those values need to describe themselves.
//!
//! ## Features
//!
//! - **One error enum**: [`ApiError`] covers malformed responses, missing
//!   records, validation failures and illegal state transitions
//! - **Validation messages**: [`ApiError::validation_errors`] pulls the
//!   `ValidationError` elements out of a parsed API response
//! - **Document seam**: [`ResponseDocument`] lets the transport layer plug in
//!   its own parsed representation; [`XmlDocument`] is provided
//! - **Reporting**: [`ErrorReport`] is a serializable snapshot for log sinks
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use xero::{ApiError, XmlDocument};
//!
//! let body = "<ApiException><Elements><DataContractBase><ValidationErrors>\
//!     <ValidationError><Message>Email address must be valid.</Message></ValidationError>\
//!     </ValidationErrors></DataContractBase></Elements></ApiException>";
//!
//! let err = ApiError::generic(
//!     "ValidationException",
//!     "A validation exception occurred",
//!     body,
//!     Some(Arc::new(XmlDocument::new(body))),
//!     "<Contact/>",
//! );
//!
//! assert_eq!(err.validation_errors(), vec!["Email address must be valid."]);
//! ```

pub mod document;
pub mod error;
pub mod invoice;

// Re-exports for convenience
pub use document::{ResponseDocument, XmlDocument};
pub use error::{ApiError, DocumentError, ErrorCategory, ErrorReport, Result};
pub use invoice::{HasPayments, InvoiceStatus};
