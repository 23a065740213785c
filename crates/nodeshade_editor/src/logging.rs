// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tracing subscriber setup.

use crate::error::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` when set, otherwise `default_directives`
pub fn log_filter(default_directives: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_directives)?),
    }
}

/// Install a global fmt subscriber.
///
/// Does nothing if the process already has a subscriber.
pub fn init_logging(default_directives: &str) -> Result<()> {
    let filter = log_filter(default_directives)?;
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        tracing::debug!("Logging already initialized: {err}");
    }
    Ok(())
}
