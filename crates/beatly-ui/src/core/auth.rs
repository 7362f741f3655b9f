//! Authentication and authorization primitives shared across the UI.
//!
//! # Design
//! - Keep sessions as plain data so callers can store/clear them without side effects.
//! - Authorization is a pure function of (session, required roles); no network calls.
//! - Nav visibility and route guarding read one role/feature table instead of
//!   duplicating role literals per call site.

use crate::routes::Route;
use serde::{Deserialize, Serialize};

/// Access-control role attached to every session.
///
/// Deserialization rejects anything outside this set, so an unrecognized role
/// can never ride along inside a session; callers see the failure and treat it
/// as unauthenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform operator: content management, upload, analytics.
    Admin,
    /// Read-only analytics access.
    Manager,
    /// Regular viewer: browse, watch, like, comment.
    Consumer,
}

impl Role {
    /// Parse a wire-level role string. Returns `None` for unknown roles.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "consumer" => Some(Self::Consumer),
            _ => None,
        }
    }

    /// Wire-level string for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Consumer => "consumer",
        }
    }
}

/// Client-held proof of authentication: identity plus bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque account id assigned by the backend.
    pub user_id: String,
    /// Display name shown in the shell.
    pub display_name: String,
    /// Access-control role for this session.
    pub role: Role,
    /// Bearer token attached to authenticated requests.
    pub token: String,
}

/// Feature surfaces whose visibility depends on the session role.
///
/// Sidebar items and route metadata both resolve through
/// [`Feature::allowed_roles`], which keeps the two checks in sync by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// Consumer browsing surface (home feed and video detail).
    Browse,
    /// Admin content management dashboard.
    Manage,
    /// Video upload entry point.
    Upload,
    /// Platform analytics.
    Analytics,
}

impl Feature {
    /// Roles allowed to reach the feature.
    #[must_use]
    pub const fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Browse => &[Role::Consumer],
            Self::Manage | Self::Upload => &[Role::Admin],
            Self::Analytics => &[Role::Admin, Role::Manager],
        }
    }

    /// Whether the role may see the feature.
    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

/// Authorization outcome for a single navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Render the requested screen.
    Allow,
    /// Navigate elsewhere instead; never the requested screen.
    Redirect(Route),
}

/// Decide whether the current session may view a screen.
///
/// Pure and synchronous so it can run on every navigation before rendering.
/// `required` is `None` (or empty) for public screens. A session whose role is
/// outside the required set lands on its own role's home screen, never on the
/// requested one.
#[must_use]
pub fn authorize(session: Option<&Session>, required: Option<&[Role]>) -> Access {
    let Some(required) = required else {
        return Access::Allow;
    };
    let Some(session) = session else {
        return Access::Redirect(Route::Login);
    };
    if required.is_empty() || required.contains(&session.role) {
        Access::Allow
    } else {
        Access::Redirect(Route::home_for(session.role))
    }
}

#[cfg(test)]
mod tests {
    use super::{Access, Feature, Role, Session, authorize};
    use crate::routes::Route;

    fn session(role: Role) -> Session {
        Session {
            user_id: "u1".to_string(),
            display_name: "Avery".to_string(),
            role,
            token: "tok".to_string(),
        }
    }

    #[test]
    fn missing_session_redirects_to_login() {
        let access = authorize(None, Some(&[Role::Consumer]));
        assert_eq!(access, Access::Redirect(Route::Login));
    }

    #[test]
    fn public_routes_allow_without_session() {
        assert_eq!(authorize(None, None), Access::Allow);
        assert_eq!(authorize(Some(&session(Role::Admin)), None), Access::Allow);
    }

    #[test]
    fn allowed_roles_pass_and_others_never_do() {
        let required = Feature::Analytics.allowed_roles();
        for role in [Role::Admin, Role::Manager] {
            assert_eq!(authorize(Some(&session(role)), Some(required)), Access::Allow);
        }
        let denied = authorize(Some(&session(Role::Consumer)), Some(required));
        assert_eq!(denied, Access::Redirect(Route::ConsumerHome));
    }

    #[test]
    fn denied_navigation_lands_on_own_home() {
        let access = authorize(
            Some(&session(Role::Manager)),
            Some(Feature::Manage.allowed_roles()),
        );
        assert_eq!(access, Access::Redirect(Route::Analytics));
    }

    #[test]
    fn empty_required_set_allows_any_session() {
        assert_eq!(authorize(Some(&session(Role::Consumer)), Some(&[])), Access::Allow);
    }

    #[test]
    fn unknown_role_strings_do_not_parse() {
        assert_eq!(Role::parse("guest"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
    }

    #[test]
    fn serde_rejects_unknown_role() {
        let err = serde_json::from_str::<Role>("\"guest\"");
        assert!(err.is_err());
        let ok: Role = serde_json::from_str("\"manager\"").expect("known role");
        assert_eq!(ok, Role::Manager);
    }

    #[test]
    fn nav_and_routes_share_the_feature_table() {
        assert!(Feature::Analytics.allows(Role::Manager));
        assert!(!Feature::Upload.allows(Role::Consumer));
        assert_eq!(
            Route::Analytics.required_roles(),
            Some(Feature::Analytics.allowed_roles())
        );
    }
}
