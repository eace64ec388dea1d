//! Tracing subscriber setup for the binary.
//!
//! Library code only emits `tracing` events and `log` records; installing a
//! subscriber is the binary's job. `RUST_LOG` always wins over the `-v`
//! count so individual modules can be turned up without touching flags.
//!
//! ## Usage
//!
//! ```ignore
//! use commscore::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(1); // -v
//!     // ... rest of application
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)))
}

/// Install the global subscriber, writing to stderr.
///
/// A second call is a no-op.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directives() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "info");
        assert_eq!(verbosity_directive(2), "debug");
        assert_eq!(verbosity_directive(3), "trace");
        assert_eq!(verbosity_directive(9), "trace");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(0);
        init_tracing(3);
        tracing::info!("subscriber installed");
    }
}
