use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Level used when `--log-level` is not understood.
const FALLBACK_LEVEL: LevelFilter = LevelFilter::WARN;

/// Install the global subscriber. `RUST_LOG` wins over `level`.
///
/// Output goes to stderr so it never interleaves with rendered panels.
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(parse_level(level).into())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default())
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(FALLBACK_LEVEL)
}
