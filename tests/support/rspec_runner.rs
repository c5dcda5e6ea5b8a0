//! Helpers for running `rspec` suites with predictable output.
//!
//! Behavioural suites read as given/when/then narratives, so their output is
//! only useful when it appears in declaration order.

use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use std::sync::Arc;

/// Runs an rspec suite with the parallel runner disabled.
///
/// Each scenario's lines print in the order they are declared instead of
/// interleaving with sibling scenarios.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    Runner::new(config, vec![logger]).run(suite);
}
