//! Score amount validation for text entered by a user.

use super::error::{ScoreError, ScoreResult};

/// Parse a user-entered score amount.
///
/// Accepts a non-negative decimal integer, ignoring surrounding whitespace.
///
/// ```
/// use scorekeeper::core::parse_amount;
///
/// assert_eq!(parse_amount(" 12 ").unwrap(), 12);
/// assert!(parse_amount("-3").is_err());
/// assert!(parse_amount("1.5").is_err());
/// ```
pub fn parse_amount(input: &str) -> ScoreResult<u32> {
    let trimmed = input.trim();
    // `u32::from_str` accepts a leading '+'
    if trimmed.starts_with('+') {
        return Err(ScoreError::InvalidAmount(input.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ScoreError::InvalidAmount(input.to_string()))
}
