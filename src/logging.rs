//! Process-wide `tracing` subscriber for the binary.
//!
//! Output goes to stderr so stdout stays clean for JSON results.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter when neither `RUST_LOG` nor a level is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Map a repeated `-v` count onto a level name, falling back to `configured`.
#[must_use]
pub fn level_for(verbosity: u8, configured: Option<&str>) -> String {
    match verbosity {
        0 => configured.unwrap_or(DEFAULT_LEVEL).to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn initialize(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("idlocator={level},idlocator_core={level}"))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        assert_eq!(level_for(0, None), "warn");
        assert_eq!(level_for(0, Some("error")), "error");
        assert_eq!(level_for(1, Some("error")), "info");
        assert_eq!(level_for(2, None), "debug");
        assert_eq!(level_for(7, None), "trace");
    }

    #[test]
    fn initialize_twice_does_not_panic() {
        initialize("warn");
        initialize("debug");
    }
}
