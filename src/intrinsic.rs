//! Computing the intrinsic size of an `<svg>` element.

use std::collections::{BTreeMap, HashMap};

use crate::error::{AttributeResultExt, ElementError};
use crate::length::Length;
use crate::svgsize_log;
use crate::viewbox::ViewBox;

/// Read-only access to an element's attributes.
///
/// This is all the resolver needs from an XML tree, so it can be implemented on top of
/// whatever XML library the caller already uses.  Values must already have their
/// entities decoded.
pub trait Element {
    /// Returns the value of the un-prefixed attribute `name`, or `None` if the element
    /// does not have it.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl<T: Element + ?Sized> Element for &T {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }
}

impl Element for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Element for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Natural width and height of an SVG document, in user units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntrinsicSize {
    pub width: f64,
    pub height: f64,
}

/// Computes the intrinsic size of an `<svg>` element from its attributes.
///
/// * If both `width` and `height` are present, they are used when both are unitless or
///   in `px`.  If either has another unit, like `em` or `%`, the size is unknown and
///   `Ok(None)` is returned; the `viewBox` is not consulted in that case.
///
/// * Otherwise, the width and height of the `viewBox` are used if it is present.
///
/// * Otherwise the size is unknown.
///
/// Malformed values in any of the attributes that get looked at are reported as an
/// [`ElementError`]; note that this is different from the size being unknown.
pub fn intrinsic_size<E: Element + ?Sized>(
    element: &E,
) -> Result<Option<IntrinsicSize>, ElementError> {
    let width = element.attribute("width");
    let height = element.attribute("height");

    if let (Some(width), Some(height)) = (width, height) {
        let width = Length::parse_str(width).attribute("width")?;
        let height = Length::parse_str(height).attribute("height")?;

        if width.unit.is_user_space() && height.unit.is_user_space() {
            return Ok(Some(IntrinsicSize {
                width: width.length,
                height: height.length,
            }));
        }

        svgsize_log!(
            "not computing intrinsic size for width={:?} height={:?}: unsupported units",
            width,
            height
        );

        return Ok(None);
    }

    if let Some(vbox) = element.attribute("viewBox") {
        let vbox = ViewBox::parse_str(vbox).attribute("viewBox")?;

        return Ok(Some(IntrinsicSize {
            width: vbox.width,
            height: vbox.height,
        }));
    }

    svgsize_log!("element has neither width and height nor viewBox; intrinsic size is unknown");

    Ok(None)
}
