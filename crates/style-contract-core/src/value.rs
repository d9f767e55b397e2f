//! Minimal declaration-value scanning.
//!
//! The contract checks only ever need the first numeric token of a value
//! (to judge intrinsic units and percentage paddings), so this stays a tiny
//! scanner rather than a value grammar.

/// A numeric token and its trailing unit, borrowed from a value string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension<'a> {
    /// The numeric text, sign included.
    pub number: &'a str,
    /// The unit directly attached to the number; empty for unitless.
    pub unit: &'a str,
}

/// Returns the first numeric token of a declaration value, with its unit.
///
/// Tokens are split on whitespace and commas. `"100px"` yields
/// `("100", "px")`, `"0"` yields `("0", "")`, `"56%"` yields `("56", "%")`.
/// Returns `None` when no token starts with a number.
#[must_use]
pub fn first_dimension(value: &str) -> Option<Dimension<'_>> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .find_map(token_dimension)
}

/// Returns true if the value's first numeric token is a percentage.
#[must_use]
pub fn is_percentage(value: &str) -> bool {
    first_dimension(value).is_some_and(|d| d.unit == "%")
}

fn token_dimension(token: &str) -> Option<Dimension<'_>> {
    let unsigned = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    let sign_len = token.len() - unsigned.len();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in unsigned.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            end = i + 1;
        } else {
            break;
        }
    }

    if !seen_digit {
        return None;
    }
    Some(Dimension {
        number: &token[..sign_len + end],
        unit: &unsigned[end..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dimension() {
        let d = first_dimension("100px").unwrap();
        assert_eq!(d.number, "100");
        assert_eq!(d.unit, "px");
    }

    #[test]
    fn unitless_zero() {
        let d = first_dimension("0").unwrap();
        assert_eq!(d.number, "0");
        assert_eq!(d.unit, "");
    }

    #[test]
    fn percentage() {
        assert!(is_percentage("56.25%"));
        assert!(!is_percentage("56.25px"));
        assert!(!is_percentage("auto"));
    }

    #[test]
    fn negative_and_fractional() {
        let d = first_dimension("-0.5em").unwrap();
        assert_eq!(d.number, "-0.5");
        assert_eq!(d.unit, "em");
    }

    #[test]
    fn skips_keywords_to_first_number() {
        let d = first_dimension("solid 1px").unwrap();
        assert_eq!(d.number, "1");
        assert_eq!(d.unit, "px");
    }

    #[test]
    fn no_number_at_all() {
        assert!(first_dimension("auto").is_none());
        assert!(first_dimension("").is_none());
        assert!(first_dimension("inherit important").is_none());
    }

    #[test]
    fn comma_separated_values() {
        let d = first_dimension("red,2rem").unwrap();
        assert_eq!(d.number, "2");
        assert_eq!(d.unit, "rem");
    }
}
