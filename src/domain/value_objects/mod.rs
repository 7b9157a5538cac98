//! Domain Value Objects

pub mod deploy_kind;
pub mod path_patterns;
pub mod project_type;

pub use deploy_kind::DeployKind;
pub use path_patterns::{PathPatterns, PatternError};
pub use project_type::ProjectType;
