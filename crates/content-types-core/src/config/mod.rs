#[cfg(feature = "toml")]
pub mod toml;

mod log;

pub use self::log::LogLevel;

use serde::{Deserialize, Serialize};

use crate::resolver::Fallback;

/// Options for building a [`Resolver`](crate::resolver::Resolver) and for the tools built on it
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The content type family used for unknown extensions (default: "binary")
    #[serde(default)]
    pub fallback: Fallback,

    /// The log level to use (default: "info")
    #[serde(default)]
    pub log_level: LogLevel,
}
