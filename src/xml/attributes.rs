//! Store XML element attributes and their values.

use std::slice;

use markup5ever::{Attribute, QualName};
use string_cache::DefaultAtom;

use crate::intrinsic::Element;

/// Type used to store attribute values.
///
/// Attribute values are often repeated across SVG files, so we intern them using the
/// string_cache crate.
pub type AttributeValue = DefaultAtom;

/// The attributes of an element, in document order.
#[derive(Debug, Clone)]
pub struct Attributes {
    attrs: Box<[(QualName, AttributeValue)]>,
}

/// Iterator from `Attributes.iter`.
pub struct AttributesIter<'a>(slice::Iter<'a, (QualName, AttributeValue)>);

impl Attributes {
    /// Creates an `Attributes` from the ones in an xml5ever tag token.
    ///
    /// The tokenizer has already decoded entities and character references in the
    /// values.  Names are not namespace-resolved; they carry the prefix as written.
    pub fn new_from_xml5ever_attributes(attrs: &[Attribute]) -> Attributes {
        let attrs = attrs
            .iter()
            .map(|a| (a.name.clone(), AttributeValue::from(&*a.value)))
            .collect();

        Attributes { attrs }
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Creates an iterator that yields `(QualName, &'a str)` tuples.
    pub fn iter(&self) -> AttributesIter<'_> {
        AttributesIter(self.attrs.iter())
    }

    /// Looks up an attribute without a namespace prefix by its local name.
    ///
    /// If the attribute is repeated, the first occurrence wins.
    pub fn get(&self, local_name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(name, _)| name.prefix.is_none() && &*name.local == local_name)
            .map(|(_, value)| &value[..])
    }
}

impl<'a> Iterator for AttributesIter<'a> {
    type Item = (QualName, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(a, v)| (a.clone(), &v[..]))
    }
}

impl Element for Attributes {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup5ever::{namespace_url, ns, LocalName, Prefix};
    use xml5ever::tendril::StrTendril;

    fn attr(prefix: Option<&str>, local: &str, value: &str) -> Attribute {
        Attribute {
            name: QualName::new(prefix.map(Prefix::from), ns!(), LocalName::from(local)),
            value: StrTendril::from_slice(value),
        }
    }

    #[test]
    fn empty_attributes() {
        let map = Attributes::new_from_xml5ever_attributes(&[]);
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.get("width"), None);
    }

    #[test]
    fn looks_up_unprefixed_attributes() {
        let map = Attributes::new_from_xml5ever_attributes(&[
            attr(Some("foo"), "width", "1"),
            attr(None, "width", "2"),
            attr(None, "viewBox", "0 0 1 1"),
            attr(None, "width", "3"),
        ]);

        assert_eq!(map.len(), 4);
        assert_eq!(map.get("width"), Some("2"));
        assert_eq!(map.get("viewBox"), Some("0 0 1 1"));
        assert_eq!(map.get("viewbox"), None);
        assert_eq!(map.attribute("height"), None);
    }

    #[test]
    fn iterates_in_document_order() {
        let map = Attributes::new_from_xml5ever_attributes(&[
            attr(None, "height", "20"),
            attr(None, "width", "10"),
        ]);

        let names: Vec<(String, String)> = map
            .iter()
            .map(|(name, value)| (name.local.to_string(), value.to_string()))
            .collect();

        assert_eq!(
            names,
            vec![
                (String::from("height"), String::from("20")),
                (String::from("width"), String::from("10")),
            ]
        );
    }
}
