//! Errors raised while turning a token into an argument.
use std::fmt::Write;

use steel_registry::PackFailure;
use thiserror::Error;

use crate::command::arguments::ArgumentKind;

/// Why a token could not be turned into an argument.
#[derive(Debug, Error)]
pub enum DecreeError {
    /// Nothing matches the token.
    #[error("Unable to find {kind} \"{token}\"")]
    NotFound {
        /// The display name of the argument type.
        kind: &'static str,
        /// The token as typed.
        token: String,
    },
    /// More than one value matches the token; the caller has to pick one.
    #[error("Multiple {kind} values match \"{token}\": {}", .candidates.join(", "))]
    MultipleMatches {
        /// The display name of the argument type.
        kind: &'static str,
        /// The token as typed.
        token: String,
        /// The tokens of every matching value.
        candidates: Vec<String>,
    },
    /// Nothing matched, but some packs could not be read and may have held a match.
    #[error("Unable to load {kind} \"{token}\": {}", describe_failures(.failures))]
    LoadFailure {
        /// The display name of the argument type.
        kind: &'static str,
        /// The token as typed.
        token: String,
        /// What could not be read.
        failures: Vec<PackFailure>,
    },
    /// The token is not a valid literal of the argument type.
    #[error("Invalid {kind} \"{token}\": {reason}")]
    Invalid {
        /// The display name of the argument type.
        kind: &'static str,
        /// The token as typed.
        token: String,
        /// What is wrong with it.
        reason: String,
    },
    /// No handler is registered for the argument type.
    #[error("No handler is registered for {0} arguments")]
    Unsupported(ArgumentKind),
}

fn describe_failures(failures: &[PackFailure]) -> String {
    let mut description = match failures.first() {
        Some(first) => first.to_string(),
        None => return "unknown failure".to_string(),
    };
    if failures.len() > 1 {
        let _ = write!(description, " (and {} more)", failures.len() - 1);
    }
    description
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use steel_registry::PackError;

    use super::*;

    fn failure(path: &str) -> PackFailure {
        PackFailure::from(PackError::MissingResource {
            path: PathBuf::from(path),
        })
    }

    #[test]
    fn test_messages() {
        let not_found = DecreeError::NotFound {
            kind: "Entity",
            token: "ghast_king".to_string(),
        };
        assert_eq!(not_found.to_string(), "Unable to find Entity \"ghast_king\"");

        let multiple = DecreeError::MultipleMatches {
            kind: "Entity",
            token: "zomb".to_string(),
            candidates: vec!["zombie".to_string(), "zombie_villager".to_string()],
        };
        assert_eq!(
            multiple.to_string(),
            "Multiple Entity values match \"zomb\": zombie, zombie_villager"
        );
    }

    #[test]
    fn test_load_failure_summarizes() {
        let error = DecreeError::LoadFailure {
            kind: "Biome",
            token: "desert".to_string(),
            failures: vec![failure("packs/a"), failure("packs/b")],
        };
        let message = error.to_string();
        assert!(message.starts_with("Unable to load Biome \"desert\": packs/a"));
        assert!(message.ends_with("(and 1 more)"));
    }
}
