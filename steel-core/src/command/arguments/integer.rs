//! An integer argument with optional magnitude suffixes.
use steel_registry::{PackError, PackScan};

use crate::command::arguments::ParameterHandler;
use crate::command::error::DecreeError;

/// An integer argument. A trailing `h`, `k` or `m` multiplies the number by a hundred,
/// a thousand or a million, so `2k` is `2000`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerHandler;

impl IntegerHandler {
    fn split_suffix(token: &str) -> (&str, i64) {
        match token.as_bytes().last() {
            Some(b'h' | b'H') => (&token[..token.len() - 1], 100),
            Some(b'k' | b'K') => (&token[..token.len() - 1], 1_000),
            Some(b'm' | b'M') => (&token[..token.len() - 1], 1_000_000),
            _ => (token, 1),
        }
    }

    fn invalid(token: &str, reason: impl Into<String>) -> DecreeError {
        DecreeError::Invalid {
            kind: "Integer",
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

impl ParameterHandler for IntegerHandler {
    type Output = i64;

    fn possibilities(&self) -> Result<PackScan<i64>, PackError> {
        Ok(PackScan::default())
    }

    fn to_token(&self, value: &i64) -> String {
        value.to_string()
    }

    fn parse(&self, token: &str) -> Result<i64, DecreeError> {
        let (digits, multiplier) = Self::split_suffix(token.trim());
        let value = digits
            .parse::<i64>()
            .map_err(|e| Self::invalid(token, e.to_string()))?;

        value
            .checked_mul(multiplier)
            .ok_or_else(|| Self::invalid(token, "number too large"))
    }

    fn default_token(&self) -> &'static str {
        "1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_suffixed() {
        assert_eq!(IntegerHandler.parse("42").unwrap(), 42);
        assert_eq!(IntegerHandler.parse("-3").unwrap(), -3);
        assert_eq!(IntegerHandler.parse("2k").unwrap(), 2_000);
        assert_eq!(IntegerHandler.parse("5H").unwrap(), 500);
        assert_eq!(IntegerHandler.parse(" 1m ").unwrap(), 1_000_000);
    }

    #[test]
    fn test_rejects_garbage_and_overflow() {
        for token in ["", "k", "twelve", "1.5"] {
            assert!(
                matches!(IntegerHandler.parse(token), Err(DecreeError::Invalid { .. })),
                "{token:?}"
            );
        }
        assert!(IntegerHandler.parse("9223372036854775807k").is_err());
    }

    #[test]
    fn test_no_possibilities() {
        assert!(IntegerHandler.possibilities().unwrap().values.is_empty());
    }
}
