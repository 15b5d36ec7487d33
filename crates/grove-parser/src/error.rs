//! Parser error types

use grove_core::CoreError;
use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// XML syntax error
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// Malformed XML attribute
    #[error("XML attribute error: {0}")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),

    /// I/O error while reading a model file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Missing required element
    #[error("Missing required element: {0}")]
    MissingElement(String),

    /// Missing required attribute
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Valid PMML this parser does not handle
    #[error("Unsupported PMML construct: {0}")]
    Unsupported(String),

    /// Core type conversion error
    #[error(transparent)]
    CoreError(#[from] CoreError),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_message() {
        let error = ParseError::MissingAttribute {
            element: "SimplePredicate".to_string(),
            attribute: "field".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing required attribute 'field' on <SimplePredicate>"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let error: ParseError = CoreError::InvalidOperator("between".to_string()).into();
        assert_eq!(error.to_string(), "Invalid operator: between");
    }
}
