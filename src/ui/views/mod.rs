pub mod history;
pub mod push;
pub mod status;
