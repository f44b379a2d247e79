//! Cursor-style parsers for numbers and list separators.
//!
//! Each function takes the remaining input as a `&str` and returns whatever is left of
//! it after parsing, together with the parsed value.  Nothing is mutated in place, so
//! the functions compose by threading the returned remainder into the next call.

use crate::error::ValueErrorKind;

// Same set as C's isspace() in the "C" locale.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Skips any run of whitespace characters.
pub fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_whitespace)
}

/// Skips any run of commas and whitespace, in any order.
///
/// SVG lists of numbers are permissive about separators, so `"1,2"`, `"1 2"`, `"1 , 2"`
/// and even `"1,,2"` all separate two numbers.
pub fn skip_comma_whitespace(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ',' || is_whitespace(c))
}

fn advance_over_digits(bytes: &[u8], pos: usize) -> usize {
    pos + bytes[pos..].iter().take_while(|c| c.is_ascii_digit()).count()
}

fn advance_over_optional(bytes: &[u8], pos: usize, needles: &[u8]) -> usize {
    match bytes.get(pos) {
        Some(c) if needles.contains(c) => pos + 1,
        _ => pos,
    }
}

/// Returns the length of the longest prefix of `bytes` that is a decimal numeral.
///
/// The grammar is the one for C's `strtod()` minus infinities, NaNs and hex floats:
///
/// ```text
/// number   ::= sign? mantissa exponent?
/// mantissa ::= digit+ ("." digit*)? | "." digit+
/// exponent ::= ("e" | "E") sign? digit+
/// ```
///
/// An `e` that is not followed by digits is not part of the number, so in `"1em"` only
/// the `"1"` is matched.
fn match_number(bytes: &[u8]) -> usize {
    let start = advance_over_optional(bytes, 0, b"+-");

    let int_end = advance_over_digits(bytes, start);
    let mut end = int_end;
    let mut found_digits = int_end > start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let frac_end = advance_over_digits(bytes, frac_start);

        if found_digits || frac_end > frac_start {
            found_digits = true;
            end = frac_end;
        }
    }

    if !found_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_start = advance_over_optional(bytes, end + 1, b"+-");
        let exp_end = advance_over_digits(bytes, exp_start);

        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}

/// Parses the longest numeral at the start of `s`.
///
/// Returns the number and the rest of the string after it.  Leading whitespace is not
/// skipped; callers that allow it must call [`skip_whitespace`] first.
///
/// A value that overflows to positive infinity is an error.  One that overflows to
/// negative infinity is returned as-is.
pub fn parse_float(s: &str) -> Result<(f64, &str), ValueErrorKind> {
    let len = match_number(s.as_bytes());
    if len == 0 {
        return Err(ValueErrorKind::invalid_number(s));
    }

    // match_number() only accepts ASCII, so len is on a char boundary.
    let (numeral, rest) = s.split_at(len);

    let number = numeral
        .parse::<f64>()
        .map_err(|_| ValueErrorKind::invalid_number(s))?;

    if number == f64::INFINITY {
        return Err(ValueErrorKind::number_overflow(s));
    }

    Ok((number, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn skips_whitespace() {
        assert_eq!(skip_whitespace(""), "");
        assert_eq!(skip_whitespace("1 2"), "1 2");
        assert_eq!(skip_whitespace(" \t\r\n\x0b\x0c1 2"), "1 2");
        assert_eq!(skip_whitespace(" ,1"), ",1");
    }

    #[test]
    fn skips_commas_and_whitespace() {
        assert_eq!(skip_comma_whitespace(""), "");
        assert_eq!(skip_comma_whitespace("1"), "1");
        assert_eq!(skip_comma_whitespace(", ,\t,1,2"), "1,2");
        assert_eq!(skip_comma_whitespace(",,,"), "");
    }

    #[test]
    fn parses_simple_numbers() {
        assert_eq!(parse_float("0"), Ok((0.0, "")));
        assert_eq!(parse_float("42"), Ok((42.0, "")));
        assert_eq!(parse_float("-1.5"), Ok((-1.5, "")));
        assert_eq!(parse_float("+3"), Ok((3.0, "")));
        assert_eq!(parse_float(".5"), Ok((0.5, "")));
        assert_eq!(parse_float("-.5"), Ok((-0.5, "")));
        assert_eq!(parse_float("5."), Ok((5.0, "")));
    }

    #[test]
    fn parses_exponents() {
        assert_eq!(parse_float("1e3"), Ok((1000.0, "")));
        assert_eq!(parse_float("1E3"), Ok((1000.0, "")));
        assert_eq!(parse_float("2.5e+2"), Ok((250.0, "")));
        assert_eq!(parse_float("25e-1"), Ok((2.5, "")));
        assert_eq!(parse_float(".5e1"), Ok((5.0, "")));
    }

    #[test]
    fn stops_at_the_end_of_the_numeral() {
        assert_eq!(parse_float("10px"), Ok((10.0, "px")));
        assert_eq!(parse_float("1 2"), Ok((1.0, " 2")));
        assert_eq!(parse_float("1,2"), Ok((1.0, ",2")));
        assert_eq!(parse_float("1.2.3"), Ok((1.2, ".3")));
        assert_eq!(parse_float("-1-2"), Ok((-1.0, "-2")));
        assert_eq!(parse_float("3%"), Ok((3.0, "%")));
    }

    #[test]
    fn exponent_needs_digits() {
        assert_eq!(parse_float("1em"), Ok((1.0, "em")));
        assert_eq!(parse_float("1ex"), Ok((1.0, "ex")));
        assert_eq!(parse_float("1e"), Ok((1.0, "e")));
        assert_eq!(parse_float("1e+"), Ok((1.0, "e+")));
        assert_eq!(parse_float("1e-x"), Ok((1.0, "e-x")));
    }

    #[test]
    fn invalid_numbers_yield_error() {
        for s in &["", " 1", "px", "+", "-", ".", "-.", "+.e1", "e5", ",1", "inf", "nan"] {
            assert!(
                matches!(parse_float(s), Err(ValueErrorKind::InvalidNumber(ref t)) if t == s),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn hex_floats_are_not_numbers() {
        assert_eq!(parse_float("0x10"), Ok((0.0, "x10")));
    }

    #[test]
    fn positive_overflow_yields_error() {
        assert!(matches!(
            parse_float("1e400"),
            Err(ValueErrorKind::NumberOverflow(_))
        ));
        assert!(matches!(
            parse_float("+1e400px"),
            Err(ValueErrorKind::NumberOverflow(ref s)) if s == "+1e400px"
        ));
    }

    #[test]
    fn negative_overflow_is_not_an_error() {
        assert_eq!(parse_float("-1e400"), Ok((f64::NEG_INFINITY, "")));
    }

    #[test]
    fn underflow_is_not_an_error() {
        assert_eq!(parse_float("1e-400"), Ok((0.0, "")));
    }

    proptest! {
        #[test]
        fn parses_formatted_floats_exactly(
            n in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO
        ) {
            let plain = format!("{n}");
            prop_assert_eq!(parse_float(&plain), Ok((n, "")));

            let exponential = format!("{n:e}");
            prop_assert_eq!(parse_float(&exponential), Ok((n, "")));

            let with_unit = format!("{n}px");
            prop_assert_eq!(parse_float(&with_unit), Ok((n, "px")));
        }
    }
}
