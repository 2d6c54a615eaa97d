// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::playground;
use crate::ui::toast::ToastMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Playground(playground::Message),
    Toast(ToastMessage),
    /// Periodic tick driving toast expiry and transitions.
    Tick(Instant),
    /// A toast handle enqueued commands that are not applied yet.
    ToastsPending,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Optional tracing filter (`--log-level`).
    pub log_level: Option<String>,
}
