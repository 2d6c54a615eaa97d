// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Picks the filter directive: CLI flag first, then `RUST_LOG`, then the default.
#[must_use]
pub fn filter_directive(cli_level: Option<&str>) -> String {
    cli_level
        .map(str::to_owned)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Installs the global subscriber. Call once, before the application starts.
pub fn init(cli_level: Option<&str>) {
    let directive = filter_directive(cli_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Invalid log filter {directive:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
