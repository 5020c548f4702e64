//! Password checks applied before the change utility is launched.
//!
//! The character blocklist mirrors what used to break the whitespace and
//! quote aware command-line splitting; it stays in place as a guard against
//! argument injection even though the arguments are now passed as an array.

use crate::constants::FORBIDDEN_PASSWORD_CHARS;
use crate::errors::{Error, Result};

/// First blocked character in `password`, if any
pub fn find_forbidden_char(password: &str) -> Option<char> {
    password.chars().find(|c| FORBIDDEN_PASSWORD_CHARS.contains(c))
}

/// Reject a new password containing any of `` ` ``, `'`, `"` or `\`
pub fn validate_new_password(password: &str) -> Result<()> {
    if find_forbidden_char(password).is_some() {
        tracing::debug!("new password rejected by the character blocklist");
        return Err(Error::validation(
            "password contains one of the unsupported special characters like \" ' \\ `",
        ));
    }
    Ok(())
}

/// Check the old/new pair: equality first, then the new password's characters
pub fn validate_password_change(old_password: &str, new_password: &str) -> Result<()> {
    if old_password == new_password {
        return Err(Error::validation(
            "Old Password and New Password argument are same. Exiting!!",
        ));
    }
    validate_new_password(new_password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_plain_passwords() {
        for pw in ["newPw2", "p@ss w0rd!", "ünïcödé", "$(whoami)", "a;b|c&d"] {
            assert!(validate_new_password(pw).is_ok(), "{pw}");
        }
    }

    #[test]
    fn test_rejects_each_forbidden_character() {
        for pw in ["new`Pw2", "it's", "say \"hi\"", "back\\slash"] {
            let err = validate_new_password(pw).unwrap_err();
            assert!(
                err.to_string().contains("unsupported special characters"),
                "{pw}"
            );
        }
    }

    #[test]
    fn test_find_forbidden_char_reports_first() {
        assert_eq!(find_forbidden_char("ab'c`"), Some('\''));
        assert_eq!(find_forbidden_char("abc"), None);
    }

    #[test]
    fn test_equality_checked_before_characters() {
        let err = validate_password_change("same`pw", "same`pw").unwrap_err();
        assert!(err
            .to_string()
            .contains("Old Password and New Password argument are same"));
    }

    #[test]
    fn test_distinct_clean_passwords_pass() {
        assert!(validate_password_change("oldPw1", "newPw2").is_ok());
    }

    proptest! {
        #[test]
        fn prop_forbidden_char_rejected_anywhere(
            prefix in "[a-zA-Z0-9 !@#$%^&*()_+=-]{0,16}",
            suffix in "[a-zA-Z0-9 !@#$%^&*()_+=-]{0,16}",
            idx in 0usize..4,
        ) {
            let password = format!("{prefix}{}{suffix}", FORBIDDEN_PASSWORD_CHARS[idx]);
            prop_assert!(validate_new_password(&password).is_err());
        }

        #[test]
        fn prop_passwords_without_forbidden_chars_pass(password in "[^`'\"\\\\]*") {
            prop_assert!(validate_new_password(&password).is_ok());
        }
    }
}
