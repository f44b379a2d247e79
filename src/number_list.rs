//! Lists of numbers separated by commas and/or whitespace.

use crate::error::ValueErrorKind;
use crate::parsers::{parse_float, skip_comma_whitespace};

#[derive(Debug, Clone, PartialEq)]
pub struct NumberList(pub Vec<f64>);

impl NumberList {
    /// Parses up to `max` numbers from the start of `s`.
    ///
    /// Returns the numbers and the remainder of the string after the last one.  Parsing
    /// stops as soon as `max` numbers have been read, or when the string ends right after
    /// a number.  Having fewer than `max` numbers is not an error here, and neither is
    /// leftover content after the last number; callers must check for both.
    ///
    /// At least one number is always attempted when `max > 0`, so an empty string, or a
    /// separator with nothing after it, yields [`ValueErrorKind::InvalidNumber`].
    pub fn parse(s: &str, max: usize) -> Result<(NumberList, &str), ValueErrorKind> {
        let mut v = Vec::with_capacity(max);
        let mut rest = s;

        while v.len() < max {
            let (n, after) = parse_float(skip_comma_whitespace(rest))?;
            v.push(n);
            rest = after;

            if rest.is_empty() {
                break;
            }
        }

        Ok((NumberList(v), rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_list() {
        assert_eq!(
            NumberList::parse("5", 1),
            Ok((NumberList(vec![5.0]), ""))
        );

        assert_eq!(
            NumberList::parse("1 2 3 4", 4),
            Ok((NumberList(vec![1.0, 2.0, 3.0, 4.0]), ""))
        );

        assert_eq!(
            NumberList::parse(" ,1, 2,,3.0\t4", 4),
            Ok((NumberList(vec![1.0, 2.0, 3.0, 4.0]), ""))
        );

        assert_eq!(
            NumberList::parse("-1-2.5.5", 4),
            Ok((NumberList(vec![-1.0, -2.5, 0.5]), ""))
        );
    }

    #[test]
    fn stops_after_max_numbers() {
        assert_eq!(
            NumberList::parse("1 2 3 4 5", 4),
            Ok((NumberList(vec![1.0, 2.0, 3.0, 4.0]), " 5"))
        );

        assert_eq!(
            NumberList::parse("1 2 3 4 ", 4),
            Ok((NumberList(vec![1.0, 2.0, 3.0, 4.0]), " "))
        );

        assert_eq!(
            NumberList::parse("1 2 foo", 2),
            Ok((NumberList(vec![1.0, 2.0]), " foo"))
        );
    }

    #[test]
    fn returns_short_list_at_end_of_input() {
        assert_eq!(
            NumberList::parse("1 2", 4),
            Ok((NumberList(vec![1.0, 2.0]), ""))
        );
    }

    #[test]
    fn zero_max_parses_nothing() {
        assert_eq!(
            NumberList::parse("1 2", 0),
            Ok((NumberList(vec![]), "1 2"))
        );
    }

    #[test]
    fn errors_on_invalid_number_list() {
        // empty
        assert!(matches!(
            NumberList::parse("", 1),
            Err(ValueErrorKind::InvalidNumber(_))
        ));
        assert!(matches!(
            NumberList::parse(" , ", 4),
            Err(ValueErrorKind::InvalidNumber(_))
        ));

        // garbage
        assert!(matches!(
            NumberList::parse("foo", 1),
            Err(ValueErrorKind::InvalidNumber(_))
        ));
        assert!(matches!(
            NumberList::parse("1 foo 2", 3),
            Err(ValueErrorKind::InvalidNumber(ref s)) if s == "foo 2"
        ));

        // trailing separator before the list is complete
        assert!(matches!(
            NumberList::parse("1 2 ", 4),
            Err(ValueErrorKind::InvalidNumber(_))
        ));
        assert!(matches!(
            NumberList::parse("1,", 2),
            Err(ValueErrorKind::InvalidNumber(_))
        ));
    }

    #[test]
    fn propagates_overflow() {
        assert!(matches!(
            NumberList::parse("0 0 1e999 1", 4),
            Err(ValueErrorKind::NumberOverflow(_))
        ));
    }
}
