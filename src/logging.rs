//! Logging configuration using tracing.
//!
//! Diagnostics go to stderr so stdout stays reserved for command output
//! and NDJSON events.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `ftpush=debug`
pub const LOG_ENV: &str = "FTPUSH_LOG";

/// Default level for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(env_value: Option<String>, verbose: u8) -> EnvFilter {
    env_value
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for(verbose)))
}

/// Initialize logging. `FTPUSH_LOG` wins over the verbosity flag.
pub fn init(verbose: u8) {
    let filter = filter(std::env::var(LOG_ENV).ok(), verbose);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }

    #[test]
    fn env_directive_wins_over_flag() {
        assert_eq!(filter(Some("ftpush=trace".to_string()), 0).to_string(), "ftpush=trace");
        assert_eq!(filter(None, 1).to_string(), "info");
        assert_eq!(filter(Some("  ".to_string()), 2).to_string(), "debug");
    }
}
