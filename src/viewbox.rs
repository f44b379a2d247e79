//! Parser for the `viewBox` attribute.

use crate::error::ValueErrorKind;
use crate::number_list::NumberList;
use crate::parsers::skip_whitespace;

/// The `viewBox` attribute.
///
/// See <https://www.w3.org/TR/SVG2/coords.html#ViewBoxAttribute>
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    // viewBox: double [,] double [,] double [,] double
    //
    // x, y, w, h
    //
    // Leading separators and trailing whitespace are allowed.  Negative widths and
    // heights are not rejected here.
    pub fn parse_str(s: &str) -> Result<ViewBox, ValueErrorKind> {
        let (NumberList(v), rest) = NumberList::parse(s, 4)?;

        if v.len() != 4 || !skip_whitespace(rest).is_empty() {
            return Err(ValueErrorKind::invalid_viewbox(s));
        }

        Ok(ViewBox {
            x: v[0],
            y: v[1],
            width: v[2],
            height: v[3],
        })
    }
}
