//! Domain Services

pub mod planner;

pub use planner::{
    decide_install, is_managed_file, plan_transfer_mode, select_transfer_tool, unrelated_changes,
    user_changes, InstallDecision, GIT_FTP_IGNORE_FILE, GIT_FTP_INCLUDE_FILE, MANAGED_FILES,
};
