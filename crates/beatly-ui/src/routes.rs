//! Routing table and per-route role metadata for the Beatly client.
//!
//! Required roles are declared here once and evaluated uniformly by the route
//! guard at navigation time; nothing re-derives them while building views.

use crate::core::auth::{Feature, Role};
use yew_router::prelude::*;

/// Client-side routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Public consumer signup.
    #[at("/signup")]
    Signup,
    /// Public login.
    #[at("/login")]
    Login,
    /// Admin content management.
    #[at("/admin/dashboard")]
    AdminDashboard,
    /// Platform analytics.
    #[at("/analytics")]
    Analytics,
    /// Consumer home feed.
    #[at("/consumer/home")]
    ConsumerHome,
    /// Consumer video detail.
    #[at("/consumer/video/:id")]
    VideoDetail {
        /// Video document id.
        id: String,
    },
    /// Catch-all; the guard redirects it to login.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Roles allowed to visit the route; `None` for public routes.
    #[must_use]
    pub const fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::Signup | Self::Login | Self::NotFound => None,
            Self::AdminDashboard => Some(Feature::Manage.allowed_roles()),
            Self::Analytics => Some(Feature::Analytics.allowed_roles()),
            Self::ConsumerHome | Self::VideoDetail { .. } => Some(Feature::Browse.allowed_roles()),
        }
    }

    /// Landing route for a role, used after login and for denied navigations.
    #[must_use]
    pub const fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Manager => Self::Analytics,
            Role::Consumer => Self::ConsumerHome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::core::auth::Role;

    #[test]
    fn public_routes_require_nothing() {
        assert_eq!(Route::Signup.required_roles(), None);
        assert_eq!(Route::Login.required_roles(), None);
    }

    #[test]
    fn protected_routes_declare_their_roles() {
        assert_eq!(Route::AdminDashboard.required_roles(), Some(&[Role::Admin][..]));
        assert_eq!(
            Route::Analytics.required_roles(),
            Some(&[Role::Admin, Role::Manager][..])
        );
        assert_eq!(
            Route::VideoDetail { id: "v1".into() }.required_roles(),
            Some(&[Role::Consumer][..])
        );
    }

    #[test]
    fn every_role_has_a_home() {
        assert_eq!(Route::home_for(Role::Admin), Route::AdminDashboard);
        assert_eq!(Route::home_for(Role::Consumer), Route::ConsumerHome);
        assert_eq!(Route::home_for(Role::Manager), Route::Analytics);
    }

    #[test]
    fn home_routes_admit_their_own_role() {
        for role in [Role::Admin, Role::Manager, Role::Consumer] {
            let required = Route::home_for(role)
                .required_roles()
                .expect("home routes are protected");
            assert!(required.contains(&role));
        }
    }
}
