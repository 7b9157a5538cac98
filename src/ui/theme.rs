use crossterm::style::Color;

/// Design tokens for the ftpush CLI.
///
/// Icons and colors used by the renderers come from this module only.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const SKIPPED: &str = "○";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const PUSH: &str = "⇪";
    pub const ROLLBACK: &str = "↺";
    pub const HISTORY: &str = "☰";
    pub const STATUS: &str = "◎";
    pub const INIT: &str = "✚";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const SKIPPED: &str = "[--]";
    pub const ARROW: &str = "[>]";

    pub const PUSH: &str = "[PUSH]";
    pub const ROLLBACK: &str = "[ROLLBACK]";
    pub const HISTORY: &str = "[HISTORY]";
    pub const STATUS: &str = "[STATUS]";
    pub const INIT: &str = "[INIT]";
}
