//! Flutter-facing bindings for the Retro Todo core.

pub mod api;
