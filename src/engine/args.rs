//! Program argument lists

use num_bigint::BigInt;

use crate::error::ArgumentError;

/// Parse a comma-separated list of decimal integers, e.g. `"1, -2, 3"`.
///
/// Blank input means no arguments.
pub fn parse_arguments(input: &str) -> Result<Vec<BigInt>, ArgumentError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input.split(',').map(parse_argument).collect()
}

fn parse_argument(raw: &str) -> Result<BigInt, ArgumentError> {
    let arg = raw.trim();
    if arg.is_empty() {
        return Err(ArgumentError::Empty);
    }

    let digits = arg.strip_prefix('-').unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArgumentError::NotAnInteger(arg.to_string()));
    }

    arg.parse()
        .map_err(|_| ArgumentError::NotAnInteger(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_no_arguments() {
        assert!(parse_arguments("").unwrap().is_empty());
        assert!(parse_arguments("  ").unwrap().is_empty());
    }

    #[test]
    fn parses_signed_integers() {
        let args = parse_arguments("1, -2,3").unwrap();
        assert_eq!(args, vec![BigInt::from(1), BigInt::from(-2), BigInt::from(3)]);
    }

    #[test]
    fn keeps_big_values_exact() {
        let big = "3618502788666131213697322783095070105623107215331596699973092056135872020481";
        let args = parse_arguments(big).unwrap();
        assert_eq!(args[0].to_string(), big);
    }

    #[test]
    fn rejects_empty_items() {
        assert_eq!(parse_arguments("1,,2").unwrap_err(), ArgumentError::Empty);
        assert_eq!(parse_arguments("1,").unwrap_err(), ArgumentError::Empty);
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["1.5", "0x10", "+3", "-", "1 2"] {
            assert!(
                matches!(parse_arguments(input), Err(ArgumentError::NotAnInteger(_))),
                "{input:?}"
            );
        }
    }
}
