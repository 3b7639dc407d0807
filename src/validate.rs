//! Auth Form Validation
//!
//! Client-side checks that gate the auth request. The form never issues a
//! network call until these pass.

/// Strength checking is wired up but switched off; the live form only
/// requires a non-empty password.
pub const ENFORCE_PASSWORD_POLICY: bool = false;

/// Which mode the auth form is in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn is_signup(self) -> bool {
        self == AuthMode::Signup
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Path segment of the auth endpoint for this mode
    pub fn endpoint(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }
}

/// Structural email check: local part, `@`, host, dot, alphabetic TLD of at
/// least two letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.chars().count() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && host_ok && tld_ok
}

/// Password policy: at least 8 characters with upper case, lower case, a
/// digit and a symbol. Only consulted when [`ENFORCE_PASSWORD_POLICY`] is on.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Validate the auth form. `Ok(())` means a request may be issued.
pub fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), String> {
    if !is_valid_email(email) {
        return Err("Please enter a valid email address".to_string());
    }
    if password.is_empty() {
        return Err("Please enter your password".to_string());
    }
    if ENFORCE_PASSWORD_POLICY && !is_strong_password(password) {
        return Err(
            "Password must be at least 8 characters with upper and lower case letters, a digit and a symbol"
                .to_string(),
        );
    }
    if mode.is_signup() && name.trim().is_empty() {
        return Err("Please enter your name".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("analyst@argus.io"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
        assert!(is_valid_email("x_9%y@host-1.net"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@host.c"));
        assert!(!is_valid_email("user@host.c0m"));
        assert!(!is_valid_email("us er@host.com"));
    }

    #[test]
    fn test_password_strength_rule() {
        assert!(is_strong_password("Aurora-77"));
        assert!(!is_strong_password("Ab1!xyz"));
        assert!(!is_strong_password("alllower1!"));
        assert!(!is_strong_password("ALLUPPER1!"));
        assert!(!is_strong_password("NoDigits!!"));
        assert!(!is_strong_password("NoSymbol11"));
    }

    #[test]
    fn test_invalid_email_blocks_submission() {
        let result = validate_credentials(AuthMode::Login, "not-an-email", "hunter2", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_signup_requires_name() {
        let err = validate_credentials(AuthMode::Signup, "analyst@argus.io", "hunter2", "  ");
        assert!(err.is_err());
        let ok = validate_credentials(AuthMode::Signup, "analyst@argus.io", "hunter2", "Ada");
        assert!(ok.is_ok());
    }

    #[test]
    fn test_login_ignores_name_and_weak_password() {
        // The strength rule stays dormant while the policy gate is off.
        let result = validate_credentials(AuthMode::Login, "analyst@argus.io", "weak", "");
        assert!(result.is_ok());
    }
}
