//! Error types.

use std::error;
use std::fmt;

/// A simple error which refers to an attribute's value.
///
/// All of these mean that the input is malformed; none of them is recoverable by
/// retrying.  Note that an attribute with a well-formed value in a unit we cannot
/// convert (for example `width="10em"`) is not an error; the resolver just reports
/// that the size is unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueErrorKind {
    /// No number could be parsed where one was expected.
    InvalidNumber(String),

    /// The number overflows to positive infinity.
    NumberOverflow(String),

    /// A length has a suffix that is not one of the known units.
    UnknownUnit(String),

    /// The `viewBox` value does not consist of exactly four numbers.
    InvalidViewBox(String),
}

impl ValueErrorKind {
    pub fn invalid_number(s: &str) -> ValueErrorKind {
        ValueErrorKind::InvalidNumber(s.to_string())
    }

    pub fn number_overflow(s: &str) -> ValueErrorKind {
        ValueErrorKind::NumberOverflow(s.to_string())
    }

    pub fn unknown_unit(s: &str) -> ValueErrorKind {
        ValueErrorKind::UnknownUnit(s.to_string())
    }

    pub fn invalid_viewbox(s: &str) -> ValueErrorKind {
        ValueErrorKind::InvalidViewBox(s.to_string())
    }
}

impl error::Error for ValueErrorKind {}

impl fmt::Display for ValueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ValueErrorKind::InvalidNumber(ref s) => write!(f, "invalid number: '{s}'"),

            ValueErrorKind::NumberOverflow(ref s) => write!(f, "number overflow: '{s}'"),

            ValueErrorKind::UnknownUnit(ref s) => write!(f, "unknown length unit '{s}'"),

            ValueErrorKind::InvalidViewBox(ref s) => {
                write!(f, "failed to parse viewBox attribute with value '{s}'")
            }
        }
    }
}

/// A complete error for an attribute and its erroneous value.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementError {
    /// Name of the attribute that failed to parse, e.g. `"width"`.
    pub attr: String,

    pub err: ValueErrorKind,
}

impl error::Error for ElementError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.err)
    }
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.attr, self.err)
    }
}

/// Helper for converting `Result<O, E>` into `Result<O, ElementError>`
///
/// Parsing functions for attribute values return a bare [`ValueErrorKind`], since they
/// don't know which attribute they are parsing.  The caller does, so it can annotate
/// the error like this:
///
/// ```
/// # use svgsize::{AttributeResultExt, ElementError, Length};
/// let result = Length::parse_str("10km").attribute("width");
/// assert!(matches!(result, Err(ElementError { ref attr, .. }) if attr == "width"));
/// ```
pub trait AttributeResultExt<O> {
    fn attribute(self, attr: &str) -> Result<O, ElementError>;
}

impl<O, E: Into<ValueErrorKind>> AttributeResultExt<O> for Result<O, E> {
    fn attribute(self, attr: &str) -> Result<O, ElementError> {
        self.map_err(|e| e.into()).map_err(|err| ElementError {
            attr: attr.to_string(),
            err,
        })
    }
}

/// Errors that can happen while loading an SVG document.
///
/// Loading only fails when no root element can be found at all.  To see details about
/// what the XML tokenizer complained about, set the `SVGSIZE_LOG=1` environment variable.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingError {
    /// XML syntax error before the root element was complete.
    XmlParseError(String),

    /// The document has no root element.
    NoRootElement,

    /// An I/O error while reading the document.
    Io(String),
}

impl error::Error for LoadingError {}

impl fmt::Display for LoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LoadingError::XmlParseError(ref s) => write!(f, "XML parse error: {s}"),
            LoadingError::NoRootElement => write!(f, "XML does not have a root element"),
            LoadingError::Io(ref s) => write!(f, "I/O error: {s}"),
        }
    }
}
