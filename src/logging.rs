//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is raised one
/// step per `verbosity`. Output goes to stderr so stdout only carries the
/// client's printed response.
pub fn init(config: &LoggingConfig, verbosity: u8) {
    let level = effective_level(&config.level, verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A second init (tests, repeated calls) is not an error worth failing on.
    let _ = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn effective_level(configured: &str, verbosity: u8) -> &'static str {
    const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
    let base = LEVELS
        .iter()
        .position(|l| *l == configured)
        .unwrap_or(2);
    LEVELS[(base + usize::from(verbosity)).min(LEVELS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("info", 0, "info")]
    #[case("info", 1, "debug")]
    #[case("info", 2, "trace")]
    #[case("warn", 5, "trace")]
    #[case("bogus", 0, "info")]
    fn test_effective_level(#[case] configured: &str, #[case] verbosity: u8, #[case] expected: &str) {
        assert_eq!(effective_level(configured, verbosity), expected);
    }
}
