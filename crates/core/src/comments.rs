//! Comment constants and validation functions.
//!
//! Field checks run in request-declaration order and the first failure
//! wins, so each function validates exactly one rule.

use crate::types::Millis;

/// Maximum length of comment content in characters.
pub const MAX_COMMENT_CONTENT_LENGTH: usize = 1000;

/// Validate comment content: required, non-empty, bounded length.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("\"content\" is required.".to_string());
    }
    if content.chars().count() > MAX_COMMENT_CONTENT_LENGTH {
        return Err(format!(
            "\"content\" is too long (max {MAX_COMMENT_CONTENT_LENGTH} characters)."
        ));
    }
    Ok(())
}

/// Validate a pin time: must be non-negative.
pub fn validate_pin_time(pin_time_ms: Millis) -> Result<(), String> {
    if pin_time_ms < 0.0 {
        return Err("\"pin_time_ms\" must be non-negative.".to_string());
    }
    Ok(())
}

/// Validate a page size: must be strictly positive.
pub fn validate_limit(limit: i64) -> Result<(), String> {
    if limit <= 0 {
        return Err("\"limit\" must be positive.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_rejected() {
        assert!(validate_content("").is_err());
    }

    #[test]
    fn content_at_limit_accepted() {
        let content = "a".repeat(MAX_COMMENT_CONTENT_LENGTH);
        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn content_over_limit_rejected() {
        let content = "a".repeat(MAX_COMMENT_CONTENT_LENGTH + 1);
        assert!(validate_content(&content).is_err());
    }

    #[test]
    fn negative_pin_time_rejected() {
        assert!(validate_pin_time(-1.0).is_err());
        assert!(validate_pin_time(0.0).is_ok());
    }

    #[test]
    fn zero_limit_rejected() {
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(1).is_ok());
    }
}
