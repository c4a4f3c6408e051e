//! Intake validation.

use crate::error::CoreError;

/// Validate the fields of a new donation request.
///
/// The nickname must contain at least one non-whitespace character and the
/// amount must be positive. Failure means nothing is stored.
pub fn validate_new_request(nickname: &str, amount: i64) -> Result<(), CoreError> {
    if nickname.trim().is_empty() {
        return Err(CoreError::Validation(
            "Nickname and amount are required".to_string(),
        ));
    }
    if amount <= 0 {
        return Err(CoreError::Validation(
            "Nickname and amount are required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_new_request("alice", 500).is_ok());
        assert!(validate_new_request("a", 1).is_ok());
    }

    #[test]
    fn test_empty_nickname_rejected() {
        assert_matches!(
            validate_new_request("", 500),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_whitespace_nickname_rejected() {
        assert_matches!(
            validate_new_request("   ", 500),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_matches!(
            validate_new_request("alice", 0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_matches!(
            validate_new_request("alice", -5),
            Err(CoreError::Validation(_))
        );
    }
}
