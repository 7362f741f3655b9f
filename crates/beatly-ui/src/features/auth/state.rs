//! Credential form state and login resolution.
//!
//! # Design
//! - Keep form inputs as plain strings; validate only on submit.
//! - Client-side validation failures never reach the network.
//! - Resolving a login response is pure so role handling is testable.

use crate::core::auth::{Role, Session};
use crate::routes::Route;
use beatly_api_models::{AuthResponse, LoginRequest, RegisterRequest};

/// Minimum accepted password length for signup.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Login form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email input value.
    pub email: String,
    /// Password input value.
    pub password: String,
}

impl LoginForm {
    /// Validate and build the login request.
    ///
    /// # Errors
    /// Returns a message describing the first missing field.
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Signup form inputs. Self-service signup always creates a consumer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Full-name input value.
    pub name: String,
    /// Email input value.
    pub email: String,
    /// Password input value.
    pub password: String,
    /// Password confirmation value.
    pub confirm: String,
}

impl SignupForm {
    /// Validate and build the registration request.
    ///
    /// # Errors
    /// Returns a message for the first failing rule: required fields,
    /// minimum password length, then the confirmation match.
    pub fn to_request(&self) -> Result<RegisterRequest, String> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err("Full name is required".to_string());
        }
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
        }
        if self.password != self.confirm {
            return Err("Passwords do not match".to_string());
        }
        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            role: Role::Consumer.as_str().to_string(),
        })
    }
}

/// Why a credential exchange that reached the server still failed locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginError {
    /// The backend reported a role this client does not recognize. Such a
    /// session must not be retained or land on any default screen.
    UnknownRole(String),
    /// The response carried no bearer token.
    MissingToken,
}

impl LoginError {
    /// Message surfaced on the login screen.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnknownRole(role) => format!("Unknown user role \"{role}\""),
            Self::MissingToken => "Login response carried no token".to_string(),
        }
    }
}

/// Resolve a successful credential exchange into a session and its landing
/// route, or reject it without navigating.
///
/// # Errors
/// Returns [`LoginError`] for an unknown role or a missing token; the caller
/// surfaces the message and performs no navigation.
pub fn resolve_login(response: &AuthResponse) -> Result<(Session, Route), LoginError> {
    let Some(role) = Role::parse(&response.user.role) else {
        return Err(LoginError::UnknownRole(response.user.role.clone()));
    };
    let Some(token) = response.token.as_ref().filter(|token| !token.is_empty()) else {
        return Err(LoginError::MissingToken);
    };
    let session = Session {
        user_id: response.user.id.clone(),
        display_name: response.user.name.clone(),
        role,
        token: token.clone(),
    };
    Ok((session, Route::home_for(role)))
}

#[cfg(test)]
mod tests {
    use super::{LoginError, LoginForm, SignupForm, resolve_login};
    use crate::routes::Route;
    use beatly_api_models::{AuthResponse, UserDoc};

    fn response(role: &str, token: Option<&str>) -> AuthResponse {
        AuthResponse {
            user: UserDoc {
                id: "u1".to_string(),
                name: "Avery".to_string(),
                email: Some("a@example.com".to_string()),
                role: role.to_string(),
            },
            token: token.map(ToString::to_string),
        }
    }

    #[test]
    fn consumer_lands_on_consumer_home() {
        let (session, route) = resolve_login(&response("consumer", Some("tok"))).expect("resolves");
        assert_eq!(route, Route::ConsumerHome);
        assert_eq!(session.token, "tok");
    }

    #[test]
    fn admin_lands_on_the_dashboard() {
        let (_, route) = resolve_login(&response("admin", Some("tok"))).expect("resolves");
        assert_eq!(route, Route::AdminDashboard);
    }

    #[test]
    fn unknown_role_is_an_error_with_no_landing() {
        let err = resolve_login(&response("guest", Some("tok"))).expect_err("rejected");
        assert_eq!(err, LoginError::UnknownRole("guest".to_string()));
        assert!(err.message().contains("guest"));
    }

    #[test]
    fn missing_token_is_rejected() {
        let err = resolve_login(&response("consumer", None)).expect_err("rejected");
        assert_eq!(err, LoginError::MissingToken);
    }

    #[test]
    fn login_form_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(form.to_request().is_err());
        form.email = "a@example.com".to_string();
        assert!(form.to_request().is_err());
        form.password = "secret123".to_string();
        assert!(form.to_request().is_ok());
    }

    #[test]
    fn signup_form_enforces_length_and_match() {
        let mut form = SignupForm {
            name: "Avery".to_string(),
            email: "a@example.com".to_string(),
            password: "short".to_string(),
            confirm: "short".to_string(),
        };
        assert!(form.to_request().unwrap_err().contains("at least"));
        form.password = "longenough".to_string();
        form.confirm = "different".to_string();
        assert_eq!(form.to_request().unwrap_err(), "Passwords do not match");
        form.confirm.clone_from(&form.password);
        let request = form.to_request().expect("valid form");
        assert_eq!(request.role, "consumer");
    }
}
