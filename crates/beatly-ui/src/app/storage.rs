//! Browser persistence and environment helpers for the app shell.

use crate::core::session::SessionBackend;
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const THEME_KEY: &str = "beatly.theme";

/// LocalStorage-backed session persistence.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl SessionBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::set(key, value) {
            log_storage_error("set", key, &err.to_string());
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

pub(crate) fn load_theme() -> ThemeMode {
    LocalStorage::get::<String>(THEME_KEY)
        .map(|value| ThemeMode::parse(&value))
        .unwrap_or_default()
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    if let Err(err) = LocalStorage::set(THEME_KEY, theme.as_str()) {
        log_storage_error("set", THEME_KEY, &err.to_string());
    }
}

/// Derive the API base URL from the page origin. The trunk dev server port
/// maps to the local backend port; anything else talks to its own origin.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:5000".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("5000"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:5000".to_string()
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
