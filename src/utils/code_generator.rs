//! Short code generation and shape checks.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest code the store accepts.
pub const MAX_CODE_LENGTH: usize = 10;

/// Codes that collide with routed path segments and are never handed out.
const RESERVED_CODES: &[&str] = &["health", "history", "shorten", "static"];

/// Generates a random short code of `length` characters.
///
/// Each character is sampled independently and uniformly from `[a-zA-Z0-9]`.
/// The result is not guaranteed unique; callers check it against the store.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` shadows a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Returns true if `code` could have been produced by [`generate_code`].
pub fn is_well_formed_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 6);
        assert_eq!(generate_code(1).len(), 1);
        assert_eq!(generate_code(MAX_CODE_LENGTH).len(), 10);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..500 {
            let code = generate_code(6);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_covers_alphabet_classes() {
        let sample: String = (0..200).map(|_| generate_code(10)).collect();

        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_mostly_distinct() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(6)).collect();

        // 62^6 possible codes; a handful of collisions would already be suspicious
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(is_reserved_code(reserved), "{reserved} should be reserved");
        }
        assert!(!is_reserved_code("aZ3xQ9"));
        assert!(!is_reserved_code("Health"));
    }

    #[test]
    fn test_well_formed_code() {
        assert!(is_well_formed_code("aZ3xQ9"));
        assert!(is_well_formed_code("a"));
        assert!(is_well_formed_code("abcdefghij"));

        assert!(!is_well_formed_code(""));
        assert!(!is_well_formed_code("abcdefghijk"));
        assert!(!is_well_formed_code("my-code"));
        assert!(!is_well_formed_code("caf\u{e9}"));
    }
}
