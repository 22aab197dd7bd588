//! Configuration validation.
//!
//! # Responsibilities
//! - Check that every required environment variable carries a value
//! - Report all missing names, not just the first
//!
//! # Design Decisions
//! - Empty string counts as missing (an empty `DB_HOST` is never useful)
//! - Validation is a pure function over a lookup closure, so tests never
//!   mutate the process environment

/// Environment variables the server refuses to start without.
pub const REQUIRED_VARS: [&str; 5] = ["DB_HOST", "DB_PORT", "DB_USER", "DB_PASSWORD", "DB_NAME"];

/// Collect every required variable the lookup has no non-empty value for,
/// in declaration order.
pub fn missing_vars<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_VARS
        .iter()
        .filter(|name| lookup(name).is_none_or(|value| value.is_empty()))
        .map(|name| (*name).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_present() {
        let env = env_of(&[
            ("DB_HOST", "localhost"),
            ("DB_PORT", "5432"),
            ("DB_USER", "shop"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "products"),
        ]);
        let missing = missing_vars(|name| env.get(name).cloned());
        assert!(missing.is_empty());
    }

    #[test]
    fn test_absent_and_empty_both_reported() {
        let env = env_of(&[
            ("DB_HOST", "localhost"),
            ("DB_PORT", ""), // empty counts as missing
            ("DB_USER", "shop"),
            ("DB_NAME", "products"),
        ]);
        let missing = missing_vars(|name| env.get(name).cloned());
        assert_eq!(missing, vec!["DB_PORT", "DB_PASSWORD"]);
    }

    #[test]
    fn test_everything_missing_reported_in_order() {
        let missing = missing_vars(|_| None);
        assert_eq!(missing, REQUIRED_VARS.map(str::to_string).to_vec());
    }
}
