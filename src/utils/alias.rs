//! Alias validation and generation.
//!
//! Aliases are the public lookup keys of the service. Validation is applied
//! to user-supplied aliases on save and to path segments on redirect;
//! generation is used when a save request omits the alias.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest alias accepted from clients.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Length of generated aliases when not configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Bounds for the configurable generated alias length.
pub const MIN_GENERATED_LENGTH: usize = 4;
pub const MAX_GENERATED_LENGTH: usize = 32;

/// Aliases that would collide with fixed routes.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Reasons an alias is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AliasError {
    #[error("alias is empty")]
    Empty,

    #[error("alias must be at most {MAX_ALIAS_LENGTH} characters, got {0}")]
    TooLong(usize),

    #[error("alias can only contain letters, digits, '-' and '_'")]
    InvalidCharacters,

    #[error("alias '{0}' is reserved")]
    Reserved(String),
}

/// Validates a client-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-`, `_`
/// - Cannot be a reserved route name
///
/// # Examples
///
/// ```ignore
/// assert!(validate_alias("promo-2024-summer").is_ok());
/// assert!(validate_alias("user_profile").is_ok());
/// assert!(validate_alias("").is_err());
/// assert!(validate_alias("health").is_err());
/// ```
pub fn validate_alias(alias: &str) -> Result<(), AliasError> {
    if alias.is_empty() {
        return Err(AliasError::Empty);
    }

    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(AliasError::TooLong(alias.len()));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AliasError::InvalidCharacters);
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AliasError::Reserved(alias.to_string()));
    }

    Ok(())
}

/// Produces random alphanumeric aliases of a fixed length.
///
/// Collisions are not retried here: a generated alias that is already taken
/// surfaces as a conflict from storage, like any other alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasGenerator {
    length: usize,
}

impl AliasGenerator {
    /// Creates a generator, clamping `length` to the supported range.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_GENERATED_LENGTH, MAX_GENERATED_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn generate(&self) -> String {
        let alias: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();

        // Only reachable with a 4+ letter reserved word; regenerate rather than leak it.
        if RESERVED_ALIASES.contains(&alias.as_str()) {
            return self.generate();
        }

        alias
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_configured_length() {
        let alias = AliasGenerator::new(10).generate();
        assert_eq!(alias.len(), 10);
    }

    #[test]
    fn test_default_generator_length() {
        let alias = AliasGenerator::default().generate();
        assert_eq!(alias.len(), DEFAULT_ALIAS_LENGTH);
    }

    #[test]
    fn test_generator_clamps_length() {
        assert_eq!(AliasGenerator::new(1).length(), MIN_GENERATED_LENGTH);
        assert_eq!(AliasGenerator::new(500).length(), MAX_GENERATED_LENGTH);
    }

    #[test]
    fn test_generated_alias_passes_validation() {
        let generator = AliasGenerator::default();

        for _ in 0..100 {
            let alias = generator.generate();
            assert!(validate_alias(&alias).is_ok(), "generated '{}'", alias);
        }
    }

    #[test]
    fn test_generate_produces_distinct_aliases() {
        let generator = AliasGenerator::new(12);
        let aliases: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_validate_accepts_common_aliases() {
        for alias in ["test_alias", "gsearch", "promo-2024-summer", "user_profile", "x1"] {
            assert!(validate_alias(alias).is_ok(), "'{}' should be valid", alias);
        }
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_alias(""), Err(AliasError::Empty));
    }

    #[test]
    fn test_validate_too_long() {
        let alias = "a".repeat(MAX_ALIAS_LENGTH + 1);
        assert_eq!(validate_alias(&alias), Err(AliasError::TooLong(65)));
    }

    #[test]
    fn test_validate_maximum_length() {
        let alias = "a".repeat(MAX_ALIAS_LENGTH);
        assert!(validate_alias(&alias).is_ok());
    }

    #[test]
    fn test_validate_special_characters() {
        assert_eq!(
            validate_alias("my alias"),
            Err(AliasError::InvalidCharacters)
        );
        assert_eq!(
            validate_alias("a/b"),
            Err(AliasError::InvalidCharacters)
        );
        assert_eq!(validate_alias("ümlaut"), Err(AliasError::InvalidCharacters));
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            let result = validate_alias(reserved);
            assert_eq!(result, Err(AliasError::Reserved(reserved.to_string())));
        }
    }
}
