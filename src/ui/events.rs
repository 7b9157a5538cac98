//! Console event sink
//!
//! Renders push and rollback progress as one line per event.

use std::io::{self, Write};

use ftpush::domain::ports::{PushEvent, PushEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    /// The text line for `event`, if it is shown at the current verbosity.
    pub fn render(&self, event: &PushEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        let line = |icon: Icon, text: String| {
            format!("  {} {}", icon.colored(color, unicode), text)
        };

        match event {
            // The command header already names root and target.
            PushEvent::Started { .. } => None,
            PushEvent::Preflight {
                repository,
                tool,
                mode,
            } => {
                let source = if *repository {
                    "git repository"
                } else {
                    "no repository"
                };
                Some(line(
                    Icon::Progress,
                    format!("{} {} ({}, {})", tool, mode.as_str(), mode.kind(), source),
                ))
            }
            PushEvent::Probed { outcome } if outcome.reachable => {
                (self.ui.verbose > 0).then(|| line(Icon::Success, "server reachable".to_string()))
            }
            PushEvent::Probed { outcome } => Some(line(
                Icon::Warning,
                ColoredText::warning(format!(
                    "server did not answer the probe: {}",
                    outcome.detail.as_deref().unwrap_or("no response")
                ))
                .render(color),
            )),
            PushEvent::StageStarted { stage, detail } => {
                Some(line(Icon::Progress, format!("{}: {}", stage, detail)))
            }
            PushEvent::StageFinished { stage, detail } => Some(line(
                Icon::Success,
                match detail {
                    Some(detail) => format!("{} done ({})", stage, detail),
                    None => format!("{} done", stage),
                },
            )),
            PushEvent::StageSkipped { stage, reason } => (self.ui.verbose > 0).then(|| {
                line(
                    Icon::Skipped,
                    ColoredText::dim(format!("{} skipped: {}", stage, reason)).render(color),
                )
            }),
            PushEvent::StageWarning { stage, message } => Some(line(
                Icon::Warning,
                ColoredText::warning(format!("{}: {}", stage, message)).render(color),
            )),
            PushEvent::Recorded {
                ordinal,
                kind,
                revision,
            } => {
                let revision = revision
                    .as_deref()
                    .map(|r| r.get(..7).unwrap_or(r))
                    .unwrap_or("-");
                Some(line(
                    Icon::Success,
                    format!("recorded deployment #{} ({}, {})", ordinal, kind, revision),
                ))
            }
            PushEvent::Completed { .. } => None,
        }
    }
}

impl PushEventSink for ConsoleEventSink {
    fn on_event(&self, event: PushEvent) {
        if let Some(line) = self.render(&event) {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", line);
        }
    }
}
