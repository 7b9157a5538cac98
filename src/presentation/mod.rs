//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the real adapters into the use cases
//!
//! ## Structure
//!
//! - `cli` - Command-line definition shared with the binary
//! - `factory` - Builds the adapters from tool paths (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::Toolbox;
