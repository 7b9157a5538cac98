use ftpush::domain::entities::HistoryError;
use ftpush::domain::ports::{ProfileError, PromptError};
use ftpush::FtpushError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Suggested next step for errors the user can act on.
fn hint(err: &FtpushError) -> Option<&'static str> {
    match err {
        FtpushError::Profile(ProfileError::NotFound { .. }) => {
            Some("Run `ftpush init` in the project root to create a profile.")
        }
        FtpushError::Profile(ProfileError::Invalid { .. }) => {
            Some("Fix the JSON by hand or recreate it with `ftpush init --force`.")
        }
        FtpushError::History(HistoryError::InsufficientHistory { .. }) => {
            Some("Rollback becomes available after the second recorded push.")
        }
        FtpushError::History(HistoryError::OrdinalOutOfRange { .. }) => {
            Some("List valid ordinals with `ftpush history`.")
        }
        FtpushError::History(HistoryError::MissingRevision { .. }) => {
            Some("Deployments made outside a git working tree cannot be restored.")
        }
        FtpushError::NoTransferTool(_) => Some("Install git-ftp, or ncftp for plain FTP mirrors."),
        FtpushError::NotARepository { .. } => Some("Run rollback from the project's git checkout."),
        FtpushError::Prompt(PromptError::Unavailable(_)) => {
            Some("Pass --yes together with a TARGET to run without a terminal.")
        }
        FtpushError::RollbackFailed { .. } => {
            Some("Changes stashed by ftpush stay in `git stash list` until you pop them.")
        }
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim("caused by:").render(supports_color),
            cause
        ));
    }

    let hint = err
        .chain()
        .find_map(|e| e.downcast_ref::<FtpushError>())
        .and_then(hint);
    if let Some(hint) = hint {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
