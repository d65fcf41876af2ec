//! How a typed token is matched against the tokens of known values.
use serde::Deserialize;

/// The matching rule used to narrow possibilities down to a token.
///
/// Whatever the rule, a blank token matches nothing and a candidate equal to the token
/// always wins alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMatcher {
    /// Only the exact token.
    Exact,
    /// Candidates starting with the token, ignoring case.
    Prefix,
    /// Candidates containing the token, ignoring case.
    #[default]
    Contains,
}

impl KeyMatcher {
    /// Returns true if `candidate` matches `token` under this rule.
    #[must_use]
    pub fn matches(self, candidate: &str, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        match self {
            Self::Exact => candidate == token,
            Self::Prefix => candidate
                .to_lowercase()
                .starts_with(&token.to_lowercase()),
            Self::Contains => candidate.to_lowercase().contains(&token.to_lowercase()),
        }
    }

    /// Keeps the candidates matching `token`.
    pub fn select<T>(
        self,
        token: &str,
        candidates: Vec<T>,
        to_token: impl Fn(&T) -> String,
    ) -> Vec<T> {
        let token = token.trim();
        if token.is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for candidate in candidates {
            let candidate_token = to_token(&candidate);
            if candidate_token == token {
                return vec![candidate];
            }
            if self.matches(&candidate_token, token) {
                matches.push(candidate);
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(matcher: KeyMatcher, token: &str) -> Vec<&'static str> {
        let candidates = vec!["zombie", "zombie_villager", "husk", "mobs/Zombie_king"];
        matcher.select(token, candidates, |c| (*c).to_string())
    }

    #[test]
    fn test_blank_token_matches_nothing() {
        assert!(select(KeyMatcher::Contains, "").is_empty());
        assert!(select(KeyMatcher::Prefix, "   ").is_empty());
    }

    #[test]
    fn test_exact_candidate_wins_alone() {
        assert_eq!(select(KeyMatcher::Contains, "zombie"), vec!["zombie"]);
        assert_eq!(select(KeyMatcher::Contains, " husk "), vec!["husk"]);
    }

    #[test]
    fn test_rules() {
        assert_eq!(
            select(KeyMatcher::Contains, "ZOMB"),
            vec!["zombie", "zombie_villager", "mobs/Zombie_king"]
        );
        assert_eq!(
            select(KeyMatcher::Prefix, "zomb"),
            vec!["zombie", "zombie_villager"]
        );
        assert!(select(KeyMatcher::Exact, "zomb").is_empty());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let matcher: KeyMatcher = serde_json::from_str("\"prefix\"").unwrap();
        assert_eq!(matcher, KeyMatcher::Prefix);
    }
}
