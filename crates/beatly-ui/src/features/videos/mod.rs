//! Consumer browsing feature surface: feed, detail, likes, comments.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
