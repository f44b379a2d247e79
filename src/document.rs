//! Loaded SVG documents.

use markup5ever::QualName;
use std::fs;
use std::path::Path;

use crate::error::{ElementError, LoadingError};
use crate::intrinsic::{intrinsic_size, Element, IntrinsicSize};
use crate::xml::{self, Attributes};

/// The outermost element of a document, with its attributes.
#[derive(Debug, Clone)]
pub struct RootElement {
    name: QualName,
    attributes: Attributes,
}

impl RootElement {
    pub(crate) fn new(name: QualName, attributes: Attributes) -> RootElement {
        RootElement { name, attributes }
    }

    /// The element's name, with its prefix as written in the document.
    pub fn name(&self) -> &QualName {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Element for RootElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}

/// An SVG document, reduced to what is needed to compute its size.
///
/// ```
/// # use svgsize::{Document, IntrinsicSize};
/// let document = Document::load_from_bytes(br#"<svg viewBox="0 0 42 37"/>"#)?;
///
/// assert_eq!(
///     document.intrinsic_size()?,
///     Some(IntrinsicSize { width: 42.0, height: 37.0 })
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    root: RootElement,
}

impl Document {
    /// Loads a document from an in-memory buffer.
    pub fn load_from_bytes(bytes: &[u8]) -> Result<Document, LoadingError> {
        let root = xml::load_root_element(bytes)?;

        Ok(Document { root })
    }

    /// Reads and loads a document from a file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Document, LoadingError> {
        let bytes = fs::read(path).map_err(|e| LoadingError::Io(format!("{e}")))?;

        Document::load_from_bytes(&bytes)
    }

    pub fn root(&self) -> &RootElement {
        &self.root
    }

    /// Computes the intrinsic size of the root element; see [`intrinsic_size`].
    pub fn intrinsic_size(&self) -> Result<Option<IntrinsicSize>, ElementError> {
        intrinsic_size(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"<svg width="10" height="20"/>"#).unwrap();

        let document = Document::load_from_path(file.path()).unwrap();

        assert_eq!(document.root().attributes().len(), 2);
        assert_eq!(
            document.intrinsic_size(),
            Ok(Some(IntrinsicSize {
                width: 10.0,
                height: 20.0
            }))
        );
    }

    #[test]
    fn missing_file_yields_io_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            Document::load_from_path(dir.path().join("nonexistent.svg")),
            Err(LoadingError::Io(_))
        ));
    }

    #[test]
    fn documents_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Document>();
        assert_send_sync::<IntrinsicSize>();
        assert_send_sync::<ElementError>();
        assert_send_sync::<LoadingError>();
    }
}
