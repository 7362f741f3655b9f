//! Video upload feature surface.
//!
//! # Design
//! - Keep validation rules pure and colocated so the form cannot drift from
//!   what the backend enforces.
//! - The modal owns file handles; only validated payloads reach the client.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
