//! Terminal output for the ftpush binary
//!
//! Renderers return strings; commands decide where they go.

pub mod blocks;
pub mod context;
pub mod error;
pub mod events;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
