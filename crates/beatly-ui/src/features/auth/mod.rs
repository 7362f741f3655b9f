//! Signup and login feature surface.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
