//! Feature slices: one directory per screen responsibility.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod upload;
pub mod videos;
