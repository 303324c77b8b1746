//! Parsed response documents.
//!
//! This module provides the [`ResponseDocument`] trait through which
//! [`ApiError`](crate::ApiError) queries a parsed API response, along with
//! the XML-backed [`XmlDocument`] implementation.

mod xml;

pub use xml::XmlDocument;

use crate::error::DocumentError;

/// A parsed API response that can be queried by element name.
///
/// The transport layer owns the parsed representation; errors hold it behind
/// an `Arc` and only ever run queries against it.
///
/// ## Examples
///
/// ```rust
/// use xero::{DocumentError, ResponseDocument};
///
/// /// A document whose validation messages were already extracted.
/// #[derive(Debug)]
/// struct Prepared(Vec<String>);
///
/// impl ResponseDocument for Prepared {
///     fn element_texts(&self, name: &str) -> Result<Vec<String>, DocumentError> {
///         match name {
///             "ValidationError" => Ok(self.0.clone()),
///             _ => Err(DocumentError::query(name, "not indexed")),
///         }
///     }
/// }
/// ```
pub trait ResponseDocument: std::fmt::Debug + Send + Sync {
    /// Returns the text content of every element named `name`, in document order.
    ///
    /// Text is returned untrimmed. An element's text is the concatenation of
    /// all text beneath it, so `<A><B>x</B>y</A>` yields `"xy"` for `A`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the document cannot be read or queried.
    fn element_texts(&self, name: &str) -> Result<Vec<String>, DocumentError>;
}
