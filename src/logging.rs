use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Workspace targets that receive log output.
const CRATE_TARGETS: &[&str] = &["nitrox", "nitrox_gas"];

/// Initialize tracing for one calculator run.
///
/// `-v` raises the level from warn through info and debug to trace.
/// `RUST_LOG` overrides the flag if set. Logs go to stderr so stdout only
/// carries the result.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn default_filter(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
