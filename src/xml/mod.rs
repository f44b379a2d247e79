//! Finds the root element of an XML document.
//!
//! We only ever need the attributes of the outermost element, so instead of building a
//! tree we run xml5ever's tokenizer and stop caring about tokens once the first start
//! tag has gone by.

use markup5ever::buffer_queue::BufferQueue;
use std::cell::RefCell;
use std::rc::Rc;
use xml5ever::tendril::StrTendril;
use xml5ever::tokenizer::{TagKind, Token, TokenSink, XmlTokenizer, XmlTokenizerOpts};

use crate::document::RootElement;
use crate::error::LoadingError;
use crate::svgsize_log;

mod attributes;

pub use attributes::{AttributeValue, Attributes, AttributesIter};

/// What the tokenizer found before and at the root element.
#[derive(Default)]
struct RootElementData {
    root: Option<RootElement>,

    // First parse error that happened before the root start tag was complete; only
    // fatal if no root element turns up.
    error: Option<String>,
}

struct RootElementSink(Rc<RefCell<RootElementData>>);

impl TokenSink for RootElementSink {
    fn process_token(&mut self, token: Token) {
        let mut data = self.0.borrow_mut();

        if data.root.is_some() {
            if let Token::ParseError(e) = token {
                svgsize_log!("ignoring XML error after the root element: {}", e);
            }

            return;
        }

        match token {
            Token::TagToken(tag)
                if tag.kind == TagKind::StartTag || tag.kind == TagKind::EmptyTag =>
            {
                let attributes = Attributes::new_from_xml5ever_attributes(&tag.attrs);
                data.root = Some(RootElement::new(tag.name, attributes));
            }

            Token::ParseError(e) => {
                if data.error.is_none() {
                    data.error = Some(e.into_owned());
                }
            }

            _ => (),
        }
    }
}

/// Decodes `bytes` and returns the document's root element.
///
/// The text is taken to be UTF-8 unless it starts with a UTF-16 byte order mark.
pub fn load_root_element(bytes: &[u8]) -> Result<RootElement, LoadingError> {
    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);

    if encoding != encoding_rs::UTF_8 {
        svgsize_log!("decoding document as {}", encoding.name());
    }

    if had_errors {
        svgsize_log!("document has malformed {} sequences", encoding.name());
    }

    let data = Rc::new(RefCell::new(RootElementData::default()));

    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from_slice(&text));

    let sink = RootElementSink(data.clone());

    let mut tokenizer = XmlTokenizer::new(sink, XmlTokenizerOpts::default());
    tokenizer.run(&mut queue);
    tokenizer.end();

    let mut data = data.borrow_mut();

    let error = data.error.take();

    let root = match (data.root.take(), error) {
        (Some(root), None) => root,

        // The tokenizer recovers from errors like internal DTD subsets or repeated
        // attributes, and the root element it produced afterwards is usable.
        (Some(root), Some(e)) => {
            svgsize_log!("ignoring XML error before the root element: {}", e);
            root
        }

        (None, Some(e)) => return Err(LoadingError::XmlParseError(e)),

        (None, None) => return Err(LoadingError::NoRootElement),
    };

    if &*root.name().local != "svg" {
        svgsize_log!("root element is <{}>, not <svg>", root.name().local);
    }

    Ok(root)
}
