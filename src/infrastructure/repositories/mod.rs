//! Repository Implementations

mod profile;

pub use profile::JsonProfileRepository;
