//! JSON Event Sink
//!
//! Outputs push and rollback events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{PushEvent, PushEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Events tagged with `command` ("push" or "rollback"), written to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PushEventSink for JsonEventSink {
    fn on_event(&self, event: PushEvent) {
        let command = self.command;
        let json = match event {
            PushEvent::Started {
                root,
                target,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "root": root.display().to_string(),
                "target": target,
                "dry_run": dry_run,
            }),

            PushEvent::Preflight {
                repository,
                tool,
                mode,
            } => serde_json::json!({
                "event": "preflight",
                "command": command,
                "repository": repository,
                "tool": tool,
                "mode": mode.as_str(),
                "kind": mode.kind().as_str(),
            }),

            PushEvent::Probed { outcome } => serde_json::json!({
                "event": "probe",
                "command": command,
                "reachable": outcome.reachable,
                "detail": outcome.detail,
            }),

            PushEvent::StageStarted { stage, detail } => serde_json::json!({
                "event": "stage_start",
                "command": command,
                "stage": stage.as_str(),
                "detail": detail,
            }),

            PushEvent::StageFinished { stage, detail } => serde_json::json!({
                "event": "stage_done",
                "command": command,
                "stage": stage.as_str(),
                "detail": detail,
            }),

            PushEvent::StageSkipped { stage, reason } => serde_json::json!({
                "event": "stage_skipped",
                "command": command,
                "stage": stage.as_str(),
                "reason": reason,
            }),

            PushEvent::StageWarning { stage, message } => serde_json::json!({
                "event": "warning",
                "command": command,
                "stage": stage.as_str(),
                "message": message,
            }),

            PushEvent::Recorded {
                ordinal,
                kind,
                revision,
            } => serde_json::json!({
                "event": "recorded",
                "command": command,
                "ordinal": ordinal,
                "kind": kind.as_str(),
                "revision": revision,
            }),

            PushEvent::Completed { dry_run, files } => serde_json::json!({
                "event": "complete",
                "command": command,
                "dry_run": dry_run,
                "files": files,
            }),
        };
        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{Stage, TransferMode};
    use crate::domain::value_objects::DeployKind;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let raw = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        raw.lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn one_object_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("push", writer);

        sink.on_event(PushEvent::Started {
            root: PathBuf::from("/srv/shop"),
            target: "ftp://ftp.example.com:21".to_string(),
            dry_run: true,
        });
        sink.on_event(PushEvent::Preflight {
            repository: true,
            tool: "git-ftp",
            mode: TransferMode::PushAll,
        });
        sink.on_event(PushEvent::StageSkipped {
            stage: Stage::Build,
            reason: "no package.json".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["command"], "push");
        assert_eq!(events[0]["dry_run"], true);
        assert_eq!(events[1]["mode"], "push --all");
        assert_eq!(events[1]["kind"], "full");
        assert_eq!(events[2]["stage"], "build");
    }

    #[test]
    fn recorded_event_carries_revision() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("rollback", writer);

        sink.on_event(PushEvent::Recorded {
            ordinal: 7,
            kind: DeployKind::Incremental,
            revision: None,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["command"], "rollback");
        assert_eq!(events[0]["ordinal"], 7);
        assert_eq!(events[0]["kind"], "incremental");
        assert!(events[0]["revision"].is_null());
    }
}
