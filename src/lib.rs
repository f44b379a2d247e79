//! Find out the intrinsic size of SVG documents.
//!
//! The intrinsic size of an SVG image is its natural width and height in user units,
//! before any scaling by whoever displays it.  This crate computes it from the
//! attributes of the outermost `<svg>` element:
//!
//! * If both `width` and `height` are present and are unitless or in `px`, they are the
//!   intrinsic size.  If either uses another unit (`em`, `%`, `cm`, ...), the size is
//!   unknown; we don't convert units.
//!
//! * Otherwise, if there is a `viewBox`, its width and height are the intrinsic size.
//!
//! * Otherwise the size is unknown.
//!
//! An unknown size is reported as `Ok(None)`.  Malformed attribute values are errors.
//!
//! # Example
//!
//! ```
//! use svgsize::{Document, IntrinsicSize};
//!
//! let document = Document::load_from_bytes(
//!     br#"<svg xmlns="http://www.w3.org/2000/svg" width="64px" height="48"/>"#,
//! )?;
//!
//! assert_eq!(
//!     document.intrinsic_size()?,
//!     Some(IntrinsicSize { width: 64.0, height: 48.0 })
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! If you already have an XML tree, implement [`Element`] for its element type and call
//! [`intrinsic_size`] directly.
//!
//! Set the `SVGSIZE_LOG` environment variable to get messages about why a size could
//! not be determined.

#![warn(nonstandard_style, rust_2018_idioms, unused)]
#![warn(trivial_casts, trivial_numeric_casts)]

pub use crate::document::{Document, RootElement};
pub use crate::error::{AttributeResultExt, ElementError, LoadingError, ValueErrorKind};
pub use crate::intrinsic::{intrinsic_size, Element, IntrinsicSize};
pub use crate::length::{Length, LengthUnit};
pub use crate::viewbox::ViewBox;
pub use crate::xml::{AttributeValue, Attributes, AttributesIter};

mod document;
mod error;
mod intrinsic;
mod length;
mod number_list;
mod parsers;
mod viewbox;
mod xml;

#[doc(hidden)]
pub mod log;

#[doc(hidden)]
pub mod bench_only {
    pub use crate::number_list::NumberList;
    pub use crate::parsers::{parse_float, skip_comma_whitespace, skip_whitespace};
}
