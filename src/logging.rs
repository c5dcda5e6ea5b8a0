//! Logger setup for the `sightline` binary and tests.
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger on stderr.
///
/// When `verbose` is `true`, per-target projection results are logged at
/// debug level. Otherwise only info level and above are shown. `RUST_LOG`
/// takes precedence over both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    // Stdout carries the JSON reports.
    builder.target(Target::Stderr);

    // `try_init` only fails if a logger was already set, which repeated calls
    // from tests may do.
    let _ = builder.try_init();
}
