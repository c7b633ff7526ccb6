//! Form Validation
//!
//! Client-side checks run before account forms are sent.

/// Password rules enforced on signup and reset
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

pub fn confirm_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match")
    }
}

/// First failing rule for a new password and its confirmation
pub fn check_new_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    validate_password(password)?;
    confirm_password(password, confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(validate_password("Ab1"), Err("Password must be at least 8 characters long"));
        assert_eq!(
            validate_password("abcdefg1"),
            Err("Password must contain at least one uppercase letter")
        );
        assert_eq!(validate_password("Abcdefgh"), Err("Password must contain at least one number"));
        assert_eq!(validate_password("Abcdefg1"), Ok(()));
    }

    #[test]
    fn test_new_password_checks_rules_before_match() {
        assert_eq!(check_new_password("short", "other"), Err("Password must be at least 8 characters long"));
        assert_eq!(check_new_password("Abcdefg1", "Abcdefg2"), Err("Passwords do not match"));
        assert_eq!(check_new_password("Abcdefg1", "Abcdefg1"), Ok(()));
    }
}
