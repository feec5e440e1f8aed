//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use serde_json::json;

/// Number of characters in a generated short code.
const CODE_LENGTH: usize = 6;

/// URL-safe alphabet used for generated codes.
///
/// Exactly 64 characters, so a random byte masked to 6 bits indexes it
/// uniformly. Every character is valid in a path segment without escaping.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Codes reserved for service endpoints that share the root path space.
const RESERVED_CODES: &[&str] = &["shorten", "stats", "health"];

/// Generates a cryptographically secure random short code.
///
/// Draws entropy from `getrandom` and maps each byte onto the 64-character
/// URL-safe alphabet, producing a 6-character code. Uniqueness is not
/// guaranteed here; the allocation loop in
/// [`crate::application::services::LinkService`] handles collisions.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: letters, digits, underscores, hyphens
/// - Cannot be a reserved system path
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < 3 || code.len() > 20 {
        return Err(AppError::bad_request(
            "Custom id must be 3-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::bad_request(
            "Custom id can only contain letters, digits, underscores, and hyphens",
            json!({ "custom_id": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This id is reserved",
            json!({ "custom_id": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 64^6 possibilities make a collision across 1000 draws implausible.
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_code("abc").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code("a2345678901234567890").is_ok());
    }

    #[test]
    fn test_validate_mixed_valid_chars() {
        assert!(validate_custom_code("My_Link-2026").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let result = validate_custom_code("ab");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("3-20 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code("a23456789012345678901").is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("my.code").is_err());
        assert!(validate_custom_code("my/code").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
