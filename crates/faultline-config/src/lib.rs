#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod responder;
pub mod telemetry;

use serde::Deserialize;

pub use env::ExpandError;
pub use responder::ResponderConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level faultline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Error response rendering
    #[serde(default)]
    pub responder: ResponderConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
