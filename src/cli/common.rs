//! Common helpers shared by the CLI entry point
//!
//! Exit codes and log subscriber setup live here so that `main.rs` stays a
//! thin dispatcher.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Update applied, or role already at the requested version
pub const EXIT_SUCCESS: i32 = 0;
/// Any usage, I/O, format or lookup failure
pub const EXIT_FAILURE: i32 = 1;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "UPDATE_DEPENDENCY_LOG";

/// Map the `-v` count to a default log level
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr log subscriber
///
/// The level comes from `-v`, unless `UPDATE_DEPENDENCY_LOG` holds a filter
/// directive. Calling this twice is harmless; the second call is ignored.
pub fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_for_verbosity(1), LevelFilter::DEBUG);
        assert_eq!(level_for_verbosity(2), LevelFilter::TRACE);
        assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(0);
        init_logging(2);
    }
}
