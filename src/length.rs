//! SVG length values.
//!
//! A [`Length`] is a number followed by an optional unit suffix, like `10`, `10px` or
//! `2.5cm`.  We only parse lengths here; converting the ones in physical or
//! font-relative units to user space would require knowing the DPI and font sizes,
//! which we don't.

use crate::error::ValueErrorKind;
use crate::parsers::parse_float;

/// Units for length values.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum LengthUnit {
    /// No unit; the number is in user space.
    User,

    /// Size of the current font
    Em,

    /// x-height of the current font
    Ex,

    /// Pixels, equivalent to user units
    Px,

    /// Inches (25.4 mm)
    In,

    /// Centimeters
    Cm,

    /// Millimeters
    Mm,

    /// Points (1/72 inch)
    Pt,

    /// Picas (12 points)
    Pc,

    /// `100.0` means 100%
    Percent,
}

impl LengthUnit {
    /// Maps a unit suffix to a unit.  Matching is exact and case-sensitive.
    fn from_suffix(suffix: &str) -> Option<LengthUnit> {
        let unit = match suffix {
            "" => LengthUnit::User,
            "px" => LengthUnit::Px,
            "%" => LengthUnit::Percent,
            "em" => LengthUnit::Em,
            "ex" => LengthUnit::Ex,
            "in" => LengthUnit::In,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            _ => return None,
        };

        Some(unit)
    }

    /// Whether a length in this unit can be used as a user-space value without conversion.
    pub fn is_user_space(self) -> bool {
        matches!(self, LengthUnit::User | LengthUnit::Px)
    }
}

/// A length value with its unit.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Length {
    /// Numeric part of the length
    pub length: f64,

    /// Unit part of the length
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(length: f64, unit: LengthUnit) -> Length {
        Length { length, unit }
    }

    /// Parses a length from an attribute value.
    ///
    /// Everything after the number is taken as the unit suffix, so whitespace around
    /// the value is not allowed: `"10px "` has an unknown unit `"px "`.
    pub fn parse_str(s: &str) -> Result<Length, ValueErrorKind> {
        let (length, suffix) = parse_float(s)?;

        LengthUnit::from_suffix(suffix)
            .map(|unit| Length::new(length, unit))
            .ok_or_else(|| ValueErrorKind::unknown_unit(suffix))
    }
}
