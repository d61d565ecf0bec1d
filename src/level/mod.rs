//! Severity levels that gate which messages produce output.

use std::fmt;
use std::str::FromStr;

mod table;

pub use table::LevelTable;

/// Derives `Ord` so the logger can compare a message's level against the configured minimum.
///
/// Ranks are contiguous from 0 and strictly increasing in severity; every
/// per-level table in the crate is keyed positionally against this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Development-time diagnostics, too noisy for normal operation.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Positive completion of an operation, one notch above plain info.
    Success = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures that prevent the operation from completing.
    Error = 4,
}

impl Level {
    /// Number of defined levels. Per-level tables are sized by this.
    pub const COUNT: usize = 5;

    /// Lowercase because parse input and `Display` use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Uppercase display name used for the default bracketed tag, `[INFO]` style.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Convenience for iteration in rank order; used by table construction and tests.
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Debug,
            Self::Info,
            Self::Success,
            Self::Warn,
            Self::Error,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "success" | "ok" => Ok(Self::Success),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
