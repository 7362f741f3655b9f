//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client and one session store per app boot.
//! - The client reads auth from the session store at call time, so no
//!   rebuild is needed when the session changes.

use crate::core::session::SessionStore;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client and session store for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
    /// The session store the client authenticates from.
    pub session: SessionStore,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, session.clone())),
            session,
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
