//! What the attached terminal can do
//!
//! Results go to stdout, prompts and progress of `init` to stderr, so the
//! two streams are checked separately.

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Prompts can be answered: stdin and stderr are both terminals
    pub interactive: bool,
    /// Only when stdout is a terminal
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

/// Which standard streams are attached to a terminal.
#[derive(Debug, Clone, Copy, Default)]
struct Streams {
    stdin: bool,
    stdout: bool,
    stderr: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    let streams = Streams {
        stdin: std::io::stdin().is_terminal(),
        stdout: std::io::stdout().is_terminal(),
        stderr: std::io::stderr().is_terminal(),
    };
    from_env(|key| std::env::var(key).ok(), streams)
}

fn from_env(env: impl Fn(&str) -> Option<String>, streams: Streams) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let is_ci = ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BITBUCKET_BUILD_NUMBER", "JENKINS_HOME"]
        .iter()
        .any(|key| env(key).is_some());

    TerminalCapabilities {
        interactive: streams.stdin && streams.stderr && !is_ci,
        supports_color: streams.stdout && !dumb && env("NO_COLOR").is_none(),
        supports_unicode: !dumb && locale_is_utf8(&env),
        is_ci,
    }
}

/// The first locale variable that is set decides; none set counts as UTF-8.
fn locale_is_utf8(env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| env(key).filter(|v| !v.is_empty()))
        .map(|locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        })
        .unwrap_or(true)
}
