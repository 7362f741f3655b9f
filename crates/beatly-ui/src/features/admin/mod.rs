//! Admin content-management feature surface.

#[cfg(target_arch = "wasm32")]
pub mod view;
