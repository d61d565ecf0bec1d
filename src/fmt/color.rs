//! ANSI wrap pairs. A spec is stored as literal escape strings rather than a
//! palette index so callers can substitute any sequence a terminal accepts,
//! including 24-bit color or non-color SGR styling.

/// A matched pair of escape strings wrapped around a span of output text.
/// The suffix is only ever emitted directly after `prefix + content`, never alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorSpec {
    /// Start of styling, e.g. `\x1b[36m`.
    pub prefix: String,
    /// End of styling, normally [`ColorSpec::RESET`].
    pub suffix: String,
}

impl ColorSpec {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// A basic 16-color SGR foreground code paired with a reset.
    #[must_use]
    fn sgr(code: u8) -> Self {
        Self::new(format!("\x1b[{code}m"), Self::RESET)
    }

    /// 24-bit foreground color for terminals that support true color.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(format!("\x1b[38;2;{r};{g};{b}m"), Self::RESET)
    }

    /// Default for `Debug`.
    #[must_use]
    pub fn cyan() -> Self {
        Self::sgr(36)
    }

    /// Default for `Info`.
    #[must_use]
    pub fn green() -> Self {
        Self::sgr(32)
    }

    /// Default for `Success`.
    #[must_use]
    pub fn bright_green() -> Self {
        Self::sgr(92)
    }

    /// Default for `Warn`.
    #[must_use]
    pub fn yellow() -> Self {
        Self::sgr(33)
    }

    /// Default for `Error`.
    #[must_use]
    pub fn red() -> Self {
        Self::sgr(31)
    }

    /// Single entry point for applying a spec, keeping prefix and suffix paired.
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, self.suffix)
    }
}
