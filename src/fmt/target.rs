//! Which span of a formatted line receives the level's color wrap.

use std::fmt;

/// Selected per logger and read on every call, so it can change between
/// any two emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTarget {
    /// Wrap only the level name inside its brackets.
    #[default]
    Level,
    /// Wrap only the rendered message text.
    Message,
    /// Wrap the entire composed line, timestamp and tag included, as one unit.
    Full,
    /// Color nothing, even when color is enabled. Also the fallback for
    /// unrecognized target strings: a cosmetic misconfiguration degrades to
    /// plain formatting instead of suppressing the line.
    None,
}

impl ColorTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Message => "message",
            Self::Full => "full",
            Self::None => "none",
        }
    }

    /// Lenient by contract: anything other than the known target names
    /// resolves to [`ColorTarget::None`] rather than an error.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "level" => Self::Level,
            "message" => Self::Message,
            "full" => Self::Full,
            _ => Self::None,
        }
    }
}

impl fmt::Display for ColorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
