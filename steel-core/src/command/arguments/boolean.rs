//! A boolean argument.
use steel_registry::{PackError, PackScan};

use crate::command::arguments::ParameterHandler;
use crate::command::error::DecreeError;

/// A boolean argument accepting `true`/`false` and the usual aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanHandler;

impl ParameterHandler for BooleanHandler {
    type Output = bool;

    fn possibilities(&self) -> Result<PackScan<bool>, PackError> {
        Ok(PackScan::complete(vec![true, false]))
    }

    fn to_token(&self, value: &bool) -> String {
        value.to_string()
    }

    fn parse(&self, token: &str) -> Result<bool, DecreeError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(DecreeError::Invalid {
                kind: "Boolean",
                token: token.to_string(),
                reason: "expected true or false".to_string(),
            }),
        }
    }

    fn default_token(&self) -> &'static str {
        "true"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::arguments::ArgumentKind;

    #[test]
    fn test_aliases() {
        for token in ["true", "YES", " on ", "1"] {
            assert!(BooleanHandler.parse(token).unwrap(), "{token}");
        }
        for token in ["false", "No", "off", "0"] {
            assert!(!BooleanHandler.parse(token).unwrap(), "{token}");
        }
        assert!(matches!(
            BooleanHandler.parse("maybe"),
            Err(DecreeError::Invalid { .. })
        ));
    }

    #[test]
    fn test_supports_only_booleans() {
        assert!(BooleanHandler.supports(ArgumentKind::Boolean));
        assert!(!BooleanHandler.supports(ArgumentKind::Integer));
    }
}
