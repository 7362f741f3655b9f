//! Transport clients for the external Beatly REST API.

pub(crate) mod api;
