//! curl connectivity probe
//!
//! Lists the remote directory once. The result is advisory only.

use std::path::PathBuf;

use super::process::ToolCommand;
use crate::domain::entities::FtpCredentials;
use crate::domain::ports::{ConnectivityProbe, ProbeOutcome};

const PROBE_TIMEOUT_SECS: u32 = 15;

pub struct CurlProbe {
    curl: PathBuf,
}

impl CurlProbe {
    pub fn new(curl: impl Into<PathBuf>) -> Self {
        Self { curl: curl.into() }
    }

    pub fn command(&self, ftp: &FtpCredentials) -> ToolCommand {
        let mut url = ftp.url_with_scheme("ftp");
        if !url.ends_with('/') {
            url.push('/');
        }
        let mut command = ToolCommand::new(&self.curl)
            .args(["--silent", "--show-error", "--list-only"])
            .arg("--max-time")
            .arg(PROBE_TIMEOUT_SECS.to_string());
        if ftp.secure {
            command = command.arg("--ssl-reqd");
        }
        command
            .arg("--user")
            .secret_arg(format!("{}:{}", ftp.username, ftp.password))
            .arg(url)
    }
}

impl ConnectivityProbe for CurlProbe {
    fn probe(&self, ftp: &FtpCredentials) -> ProbeOutcome {
        match self.command(ftp).output() {
            Ok(output) if output.success => ProbeOutcome::reachable(),
            Ok(output) => ProbeOutcome::unreachable(output.failure_text()),
            Err(e) => ProbeOutcome::unreachable(format!(
                "could not run {}: {}",
                self.curl.display(),
                e
            )),
        }
    }
}
