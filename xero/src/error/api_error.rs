//! Top-level Xero client error type.

use std::str::FromStr;
use std::sync::Arc;

use strum::IntoStaticStr;
use thiserror::Error;

use super::{DocumentError, ErrorCategory, ErrorReport};
use crate::document::ResponseDocument;
use crate::invoice::{HasPayments, InvoiceStatus};

/// Element holding one validation complaint in an API error response.
const VALIDATION_ERROR_ELEMENT: &str = "ValidationError";

/// `Type` reported by the API when a request failed validation.
const VALIDATION_EXCEPTION: &str = "ValidationException";

/// Error type for all Xero client operations.
///
/// Every variant is built by the transport or model layer at the point the
/// fault is detected and is handed to the caller unchanged. The `Display`
/// output is the diagnostic message; [`validation_errors`](Self::validation_errors)
/// splits it into discrete complaints where the API supplied them.
///
/// ## Examples
///
/// ```rust
/// use xero::{ApiError, ErrorCategory};
///
/// fn describe(err: &ApiError) -> String {
///     match err.category() {
///         ErrorCategory::NotFound => format!("missing: {err}"),
///         ErrorCategory::Response => format!("bad response: {err}"),
///         _ => err.message(),
///     }
/// }
///
/// let err = ApiError::object_not_found("Invoices");
/// assert_eq!(describe(&err), "missing: Couldn't find object for API Endpoint Invoices");
/// ```
#[derive(Debug, Clone, Error, IntoStaticStr)]
pub enum ApiError {
    /// The API reported an exception for the request.
    #[error("{kind}: {message}\nGenerated by the following XML:\n{raw_response_body}")]
    Generic {
        /// Exception type reported by the API (e.g. `ValidationException`).
        kind: String,
        /// Exception message reported by the API.
        message: String,
        /// Response body as received.
        raw_response_body: String,
        /// Parsed form of the response body, if parsing succeeded.
        parsed_response: Option<Arc<dyn ResponseDocument>>,
        /// Body of the request that triggered the exception.
        request_body: String,
    },

    /// The response had a root element the client does not handle.
    #[error("A root element of {root_element_name} was returned, and we don't understand that!")]
    UnparseableResponse {
        /// Name of the unexpected root element.
        root_element_name: String,
    },

    /// The endpoint returned no object for the request.
    #[error("Couldn't find object for API Endpoint {api_endpoint}")]
    ObjectNotFound {
        /// The endpoint that was queried.
        api_endpoint: String,
    },

    /// The requested invoice does not exist.
    #[error("Invoice not found")]
    InvoiceNotFound,

    /// The requested credit note does not exist.
    #[error("Credit note not found")]
    CreditNoteNotFound,

    /// The model does not support the requested operation.
    #[error("Method {method_name} not allowed on {class_name}")]
    MethodNotAllowed {
        /// Model the method was called on.
        class_name: String,
        /// The disallowed method.
        method_name: String,
    },

    /// An update was attempted on a record without any identifying key.
    #[error("One of the keys {} need to be defined to update the record.", .possible_keys.join(", "))]
    RecordKeyMustBeDefined {
        /// Keys any one of which would identify the record.
        possible_keys: Vec<String>,
    },

    /// The record failed local validation.
    #[error("Record invalid")]
    RecordInvalid,

    /// A computed total was assigned directly.
    #[error("Can't set the total {attribute_name} directly as this is calculated automatically.")]
    SettingTotalDirectly {
        /// The computed attribute.
        attribute_name: String,
    },

    /// A query filter named an attribute the model does not have.
    #[error("{attribute_name} is not an attribute of {model_name}.")]
    InvalidAttributeInWhere {
        /// Model being queried.
        model_name: String,
        /// The unknown attribute.
        attribute_name: String,
    },

    /// An association was given a record of the wrong model.
    #[error("{expected_class_name} expected, got {actual_class_name}")]
    AssociationTypeMismatch {
        /// Model the association accepts.
        expected_class_name: String,
        /// Model that was supplied.
        actual_class_name: String,
    },

    /// An invoice status change was refused.
    ///
    /// The message is empty unless the target status requires an invoice
    /// without payments and the invoice has some.
    #[error("{}", status_change_message(.new_status, *.payment_count))]
    CannotChangeInvoiceStatus {
        /// Payments applied to the invoice when the change was attempted.
        payment_count: usize,
        /// The requested status.
        new_status: String,
    },

    /// The client is not configured to talk to the API.
    #[error("Invalid client")]
    InvalidClient,
}

fn status_change_message(new_status: &str, payment_count: usize) -> String {
    let restricted = InvoiceStatus::from_str(new_status)
        .map(InvoiceStatus::requires_no_payments)
        .unwrap_or(false);

    if restricted && payment_count != 0 {
        format!("There must be no payments in this invoice to change to '{new_status}'")
    } else {
        String::new()
    }
}

impl ApiError {
    /// Creates an error for an exception reported by the API.
    ///
    /// ## Arguments
    ///
    /// * `kind` - The exception `Type` from the response.
    /// * `message` - The exception `Message` from the response.
    /// * `raw_response_body` - The response body as received.
    /// * `parsed_response` - The parsed body, or `None` if it could not be parsed.
    /// * `request_body` - The body of the failed request.
    pub fn generic(
        kind: impl Into<String>,
        message: impl Into<String>,
        raw_response_body: impl Into<String>,
        parsed_response: Option<Arc<dyn ResponseDocument>>,
        request_body: impl Into<String>,
    ) -> Self {
        Self::Generic {
            kind: kind.into(),
            message: message.into(),
            raw_response_body: raw_response_body.into(),
            parsed_response,
            request_body: request_body.into(),
        }
    }

    /// Creates an unparseable response error.
    pub fn unparseable_response(root_element_name: impl Into<String>) -> Self {
        Self::UnparseableResponse {
            root_element_name: root_element_name.into(),
        }
    }

    /// Creates an object not found error.
    pub fn object_not_found(api_endpoint: impl Into<String>) -> Self {
        Self::ObjectNotFound {
            api_endpoint: api_endpoint.into(),
        }
    }

    /// Creates a method not allowed error.
    pub fn method_not_allowed(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
    ) -> Self {
        Self::MethodNotAllowed {
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }

    /// Creates a missing record key error.
    pub fn record_key_must_be_defined<I, S>(possible_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::RecordKeyMustBeDefined {
            possible_keys: possible_keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an error for assigning a computed total.
    pub fn setting_total_directly(attribute_name: impl Into<String>) -> Self {
        Self::SettingTotalDirectly {
            attribute_name: attribute_name.into(),
        }
    }

    /// Creates an error for filtering on an unknown attribute.
    pub fn invalid_attribute_in_where(
        model_name: impl Into<String>,
        attribute_name: impl Into<String>,
    ) -> Self {
        Self::InvalidAttributeInWhere {
            model_name: model_name.into(),
            attribute_name: attribute_name.into(),
        }
    }

    /// Creates an association type mismatch error.
    pub fn association_type_mismatch(
        expected_class_name: impl Into<String>,
        actual_class_name: impl Into<String>,
    ) -> Self {
        Self::AssociationTypeMismatch {
            expected_class_name: expected_class_name.into(),
            actual_class_name: actual_class_name.into(),
        }
    }

    /// Creates an error for a refused invoice status change.
    ///
    /// The invoice's payment count is read once, here.
    pub fn cannot_change_invoice_status<I>(invoice: &I, new_status: impl Into<String>) -> Self
    where
        I: HasPayments + ?Sized,
    {
        Self::CannotChangeInvoiceStatus {
            payment_count: invoice.payment_count(),
            new_status: new_status.into(),
        }
    }

    /// Returns the diagnostic message.
    ///
    /// Identical to the `Display` output. Empty for a
    /// [`CannotChangeInvoiceStatus`](Self::CannotChangeInvoiceStatus) that
    /// has nothing to report.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the individual validation complaints carried by this error.
    ///
    /// For [`Generic`](Self::Generic) errors these are the trimmed texts of
    /// the `ValidationError` elements of the parsed response, in document
    /// order. If the response was not parsed, or the query fails, this falls
    /// back to the diagnostic message. Every other variant returns its
    /// message alone.
    pub fn validation_errors(&self) -> Vec<String> {
        let Self::Generic {
            parsed_response, ..
        } = self
        else {
            return vec![self.message()];
        };

        match query_validation_errors(parsed_response.as_deref()) {
            Ok(errors) => errors,
            Err(err) => {
                tracing::debug!(
                    error = %err,
                    "validation errors unavailable, falling back to message"
                );
                vec![self.message()]
            }
        }
    }

    /// Returns the coarse class of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Generic { .. } | Self::UnparseableResponse { .. } => ErrorCategory::Response,
            Self::ObjectNotFound { .. } | Self::InvoiceNotFound | Self::CreditNoteNotFound => {
                ErrorCategory::NotFound
            }
            Self::MethodNotAllowed { .. }
            | Self::RecordKeyMustBeDefined { .. }
            | Self::SettingTotalDirectly { .. }
            | Self::InvalidAttributeInWhere { .. }
            | Self::AssociationTypeMismatch { .. }
            | Self::InvalidClient => ErrorCategory::ClientMisuse,
            Self::RecordInvalid | Self::CannotChangeInvoiceStatus { .. } => {
                ErrorCategory::BusinessRule
            }
        }
    }

    /// Returns the variant name, e.g. `"ObjectNotFound"`.
    pub fn variant_name(&self) -> &'static str {
        self.into()
    }

    /// Returns `true` if the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// Returns `true` if the error was caused by incorrect use of the client.
    ///
    /// These errors will recur until the calling code changes.
    pub fn is_client_misuse(&self) -> bool {
        self.category() == ErrorCategory::ClientMisuse
    }

    /// Returns `true` if the record failed validation, locally or on the API side.
    pub fn is_validation_exception(&self) -> bool {
        match self {
            Self::Generic { kind, .. } => kind == VALIDATION_EXCEPTION,
            Self::RecordInvalid => true,
            _ => false,
        }
    }

    /// Builds a serializable snapshot of this error.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            variant: self.variant_name().to_string(),
            category: self.category(),
            message: self.message(),
            validation_errors: self.validation_errors(),
        }
    }
}

fn query_validation_errors(
    document: Option<&dyn ResponseDocument>,
) -> Result<Vec<String>, DocumentError> {
    let document = document.ok_or(DocumentError::Missing)?;
    let texts = document.element_texts(VALIDATION_ERROR_ELEMENT)?;
    Ok(texts.iter().map(|text| text.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::XmlDocument;

    #[derive(Debug)]
    struct FailingDocument;

    impl ResponseDocument for FailingDocument {
        fn element_texts(&self, name: &str) -> Result<Vec<String>, DocumentError> {
            Err(DocumentError::query(name, "index unavailable"))
        }
    }

    fn generic_with(document: Option<Arc<dyn ResponseDocument>>) -> ApiError {
        ApiError::generic(
            "ValidationException",
            "A validation exception occurred",
            "<ApiException />",
            document,
            "<Invoice />",
        )
    }

    #[test]
    fn test_generic_message_format() {
        let err = generic_with(None);
        assert_eq!(
            err.message(),
            "ValidationException: A validation exception occurred\n\
             Generated by the following XML:\n<ApiException />"
        );
    }

    #[test]
    fn test_generic_message_with_empty_fields() {
        let err = ApiError::generic("", "", "", None, "");
        assert_eq!(err.message(), ": \nGenerated by the following XML:\n");
    }

    #[test]
    fn test_validation_errors_trimmed_in_order() {
        let xml = "<ApiException><ValidationErrors>\
                   <ValidationError>  Name required  </ValidationError>\
                   <ValidationError>Amount must be positive</ValidationError>\
                   </ValidationErrors></ApiException>";
        let err = generic_with(Some(Arc::new(XmlDocument::new(xml))));
        assert_eq!(
            err.validation_errors(),
            vec!["Name required", "Amount must be positive"]
        );
    }

    #[test]
    fn test_validation_errors_keep_interior_whitespace() {
        let xml =
            "<Response><ValidationError>\n  Due date  must be set \n</ValidationError></Response>";
        let err = generic_with(Some(Arc::new(XmlDocument::new(xml))));
        assert_eq!(err.validation_errors(), vec!["Due date  must be set"]);
    }

    #[test]
    fn test_validation_errors_empty_when_none_reported() {
        let err = generic_with(Some(Arc::new(XmlDocument::new("<ApiException />"))));
        assert!(err.validation_errors().is_empty());
    }

    #[test]
    fn test_validation_errors_without_document_fall_back() {
        let err = generic_with(None);
        assert_eq!(err.validation_errors(), vec![err.message()]);
    }

    #[test]
    fn test_validation_errors_read_through_doctype() {
        let xml = "<!DOCTYPE x><x><ValidationError>B</ValidationError></x>";
        let err = generic_with(Some(Arc::new(XmlDocument::new(xml))));
        assert_eq!(err.validation_errors(), vec!["B"]);
    }

    #[test]
    fn test_validation_errors_with_malformed_document_fall_back() {
        let err = generic_with(Some(Arc::new(XmlDocument::new("<ApiException>"))));
        assert_eq!(err.validation_errors(), vec![err.message()]);
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_query_failure_falls_back_and_logs() {
        let err = generic_with(Some(Arc::new(FailingDocument)));
        assert_eq!(err.validation_errors(), vec![err.message()]);
        assert!(logs_contain("falling back to message"));
        assert!(logs_contain("index unavailable"));
    }

    #[test]
    fn test_record_key_must_be_defined() {
        let err = ApiError::record_key_must_be_defined(["Code", "Name"]);
        assert_eq!(
            err.message(),
            "One of the keys Code, Name need to be defined to update the record."
        );
    }

    #[test]
    fn test_cannot_change_status_with_payments() {
        let payments = vec!["payment"];
        let err = ApiError::cannot_change_invoice_status(&payments, "VOIDED");
        assert_eq!(
            err.message(),
            "There must be no payments in this invoice to change to 'VOIDED'"
        );
    }

    #[test]
    fn test_cannot_change_status_without_payments_is_silent() {
        let payments: Vec<&str> = Vec::new();
        let err = ApiError::cannot_change_invoice_status(&payments, "DELETED");
        assert_eq!(err.message(), "");
        assert_eq!(err.validation_errors(), vec![String::new()]);
    }

    #[test]
    fn test_cannot_change_status_to_unrestricted_status_is_silent() {
        let payments = vec!["p1", "p2", "p3"];
        let err = ApiError::cannot_change_invoice_status(&payments, "AUTHORISED");
        assert_eq!(err.message(), "");
    }

    #[test]
    fn test_association_type_mismatch() {
        let err = ApiError::association_type_mismatch("Invoice", "CreditNote");
        assert_eq!(err.message(), "Invoice expected, got CreditNote");
    }

    #[test]
    fn test_categories() {
        assert_eq!(generic_with(None).category(), ErrorCategory::Response);
        assert!(ApiError::InvoiceNotFound.is_not_found());
        assert!(ApiError::InvalidClient.is_client_misuse());
        assert_eq!(
            ApiError::RecordInvalid.category(),
            ErrorCategory::BusinessRule
        );
    }

    #[test]
    fn test_is_validation_exception() {
        assert!(generic_with(None).is_validation_exception());
        assert!(ApiError::RecordInvalid.is_validation_exception());

        let other = ApiError::generic("PostDataInvalidException", "bad", "", None, "");
        assert!(!other.is_validation_exception());
        assert!(!ApiError::InvoiceNotFound.is_validation_exception());
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(generic_with(None).variant_name(), "Generic");
        assert_eq!(
            ApiError::setting_total_directly("sub_total").variant_name(),
            "SettingTotalDirectly"
        );
    }
}
