use thiserror::Error;

/// The username cannot be turned into a synthetic address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid username: must be non-empty and contain only letters, digits, '.', '_' or '-'")]
pub struct InvalidUsernameError;

/// Whether a username is acceptable for account creation and sign-in.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Builds the provider-facing address for a username.
///
/// The accepted character class cannot contain `@`, so the mapping from
/// username to address is injective: two distinct usernames can never
/// collide after transformation.
pub fn synthetic_address(username: &str, domain: &str) -> Result<String, InvalidUsernameError> {
    if !is_valid_username(username) {
        return Err(InvalidUsernameError);
    }
    Ok(format!("{username}@{domain}"))
}

/// Local part of a synthetic address, used as the fallback username when no
/// profile row exists for a session.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_address_from_username() {
        assert_eq!(
            synthetic_address("anna_92", "autostop.com").as_deref(),
            Ok("anna_92@autostop.com")
        );
    }

    #[test]
    fn rejects_empty_username() {
        assert_eq!(synthetic_address("", "autostop.com"), Err(InvalidUsernameError));
    }

    #[test]
    fn rejects_address_like_usernames() {
        // 'a@b' and plain 'a' must not map to the same account.
        assert_eq!(
            synthetic_address("a@autostop.com", "autostop.com"),
            Err(InvalidUsernameError)
        );
        assert!(!is_valid_username("anna smith"));
    }

    #[test]
    fn local_part_splits_at_first_at() {
        assert_eq!(local_part("anna@autostop.com"), "anna");
        assert_eq!(local_part("no-domain"), "no-domain");
    }
}
