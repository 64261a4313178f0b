//! Parsing of answers typed on the command line

use pawtype_domain::{DomainError, MAX_ANSWER, MIN_ANSWER};

/// Split answer arguments on commas and whitespace into values.
///
/// Only the token syntax is checked here; count and range are validated
/// by the scorer.
pub fn parse_answers<S: AsRef<str>>(args: &[S]) -> Result<Vec<u8>, DomainError> {
    args.iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|token| {
            token.parse::<u8>().map_err(|_| {
                DomainError::InvalidInput(format!("'{}' is not an answer value", token))
            })
        })
        .collect()
}

/// Parse one interactive answer, accepting only a value on the scale
pub fn parse_choice(line: &str) -> Option<u8> {
    line.trim()
        .parse::<u8>()
        .ok()
        .filter(|v| (MIN_ANSWER..=MAX_ANSWER).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(parse_answers(&["1,2,3"]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_separators_and_args() {
        assert_eq!(
            parse_answers(&["1, 2", "3 4,5"]).unwrap(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_out_of_range_is_left_to_scorer() {
        assert_eq!(parse_answers(&["0,6"]).unwrap(), vec![0, 6]);
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse_answers(&["1,x,3"]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 3 "), Some(3));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("6"), None);
        assert_eq!(parse_choice("yes"), None);
    }
}
