//! Tracing subscriber setup.
//!
//! `PROTO_FORGE_LOG` takes precedence, then `RUST_LOG`; both use the usual
//! `EnvFilter` syntax (e.g. `proto_forge_emit=trace`). Without either, the
//! level follows `-v`/`--quiet`. Output always goes to stderr so it never mixes
//! with `emit --stdout`.

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let filter = build_filter(verbose, quiet);

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if let Ok(val) = std::env::var("PROTO_FORGE_LOG") {
        return EnvFilter::builder().parse_lossy(val);
    }
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(default_level(verbose, quiet))
}

/// Level used when no filter is set in the environment.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(0, false), "warn");
        assert_eq!(default_level(1, false), "info");
        assert_eq!(default_level(2, false), "debug");
        assert_eq!(default_level(3, false), "trace");
        assert_eq!(default_level(9, false), "trace");
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(default_level(0, true), "error");
    }
}
