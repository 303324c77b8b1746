//! XML response documents.

use roxmltree::{Document, Node, ParsingOptions};

use super::ResponseDocument;
use crate::error::DocumentError;

/// An XML API response body.
///
/// The body is kept as text and parsed when queried, so a document built from
/// a malformed body still constructs and reports the parse failure through
/// [`ResponseDocument::element_texts`].
///
/// ## Examples
///
/// ```rust
/// use xero::{ResponseDocument, XmlDocument};
///
/// let doc = XmlDocument::new("<Errors><ValidationError>Bad</ValidationError></Errors>");
/// assert_eq!(doc.root_element_name().unwrap(), "Errors");
/// assert_eq!(doc.element_texts("ValidationError").unwrap(), vec!["Bad"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    source: String,
}

impl XmlDocument {
    /// Wraps an XML body.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Wraps a raw response body.
    ///
    /// ## Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn from_bytes(body: bytes::Bytes) -> Result<Self, DocumentError> {
        let source = String::from_utf8(body.to_vec())?;
        Ok(Self { source })
    }

    /// Returns the body text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the local name of the root element.
    ///
    /// ## Errors
    ///
    /// Returns an error if the body is not well-formed XML.
    pub fn root_element_name(&self) -> Result<String, DocumentError> {
        let doc = self.parse()?;
        Ok(doc.root_element().tag_name().name().to_string())
    }

    /// Parses the body, accepting a DOCTYPE declaration.
    fn parse(&self) -> Result<Document<'_>, DocumentError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        Document::parse_with_options(&self.source, options).map_err(DocumentError::from)
    }
}

impl ResponseDocument for XmlDocument {
    fn element_texts(&self, name: &str) -> Result<Vec<String>, DocumentError> {
        let doc = self.parse()?;
        let texts: Vec<String> = doc
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == name)
            .map(text_content)
            .collect();

        tracing::trace!(
            element = name,
            matches = texts.len(),
            "queried XML document"
        );
        Ok(texts)
    }
}

/// Concatenated text of every text node beneath `node`.
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
