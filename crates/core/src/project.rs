//! Project field constraints and status vocabulary.
//!
//! Lengths are counted in characters, not bytes.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

pub const NAME_MIN_LEN: usize = 1;
pub const NAME_MAX_LEN: usize = 120;
pub const DESCRIPTION_MAX_LEN: usize = 2000;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_PAUSED: &str = "paused";
pub const STATUS_COMPLETED: &str = "completed";

/// Status assigned when a create request omits one.
pub const DEFAULT_STATUS: &str = STATUS_ACTIVE;

/// Conventional project statuses. Stored as free text, so values outside
/// this list are accepted.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_PAUSED, STATUS_COMPLETED];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project name (1..=120 characters).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len < NAME_MIN_LEN {
        return Err(CoreError::Validation("Name must not be empty".into()));
    }
    if len > NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a project description (at most 2000 characters).
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "Description must be at most {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Whether `status` is one of the conventional values.
pub fn is_known_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_name -------------------------------------------------------

    #[test]
    fn name_valid() {
        assert!(validate_name("Launch").is_ok());
    }

    #[test]
    fn name_empty_rejected() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn name_at_limit_accepted() {
        assert!(validate_name(&"a".repeat(NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn name_over_limit_rejected() {
        assert!(validate_name(&"a".repeat(NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        // 120 two-byte characters.
        assert!(validate_name(&"é".repeat(NAME_MAX_LEN)).is_ok());
    }

    // -- validate_description ------------------------------------------------

    #[test]
    fn description_empty_accepted() {
        assert!(validate_description("").is_ok());
    }

    #[test]
    fn description_over_limit_rejected() {
        let err = validate_description(&"x".repeat(DESCRIPTION_MAX_LEN + 1)).unwrap_err();
        assert!(err.to_string().contains("2000"));
    }

    // -- is_known_status -----------------------------------------------------

    #[test]
    fn known_statuses() {
        assert!(is_known_status("active"));
        assert!(is_known_status("paused"));
        assert!(is_known_status("completed"));
    }

    #[test]
    fn unknown_status_is_not_known() {
        assert!(!is_known_status("archived"));
        assert!(!is_known_status("Active"));
    }
}
