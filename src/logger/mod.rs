//! One cohesive object: read config, filter by severity, format, write to
//! stdout. There is no state beyond the public configuration fields and no
//! lifecycle beyond construction.

use crate::fmt::{ColorSpec, ColorTarget};
use crate::level::{Level, LevelTable};
use chrono::Local;
use std::fmt;
use std::io::{self, Write};

/// Second precision, local time, matching the `[2025-01-15 14:30:00]` block.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Leveled console logger. Every field is plain mutable configuration;
/// callers may change any of them between two emit calls and the next call
/// re-derives its output from the current values. Nothing is cached.
///
/// No internal synchronization is provided. A logger shared across threads
/// needs external locking around both the configuration and the writes, or
/// interleaved lines may interleave at the byte level.
#[derive(Debug, Clone)]
pub struct Logger {
    /// Calls below this rank are dropped silently.
    pub min_level: Level,
    /// Global color switch. When off, every target renders the plain path.
    pub use_color: bool,
    /// Display name per level, shown inside the bracketed tag. Owned per
    /// instance, so overriding one logger's names never leaks into another.
    pub level_names: LevelTable<String>,
    /// ANSI wrap pair per level, owned per instance like the names.
    pub level_colors: LevelTable<ColorSpec>,
    /// Which span of the line the level's color applies to.
    pub color_target: ColorTarget,
    /// Include the `[YYYY-MM-DD HH:MM:SS]` block.
    pub show_time: bool,
    /// Include the `[LEVELNAME]` block.
    pub show_tag: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::Info, true)
    }
}

impl Logger {
    /// Never fails; the result is fully usable with every level named and
    /// colored. Conventional palette: debug cyan, info green, success
    /// bright green, warn yellow, error red.
    #[must_use]
    pub fn new(min_level: Level, use_color: bool) -> Self {
        Self {
            min_level,
            use_color,
            level_names: LevelTable::from_fn(|level| level.label().to_string()),
            level_colors: LevelTable::new([
                ColorSpec::cyan(),
                ColorSpec::green(),
                ColorSpec::bright_green(),
                ColorSpec::yellow(),
                ColorSpec::red(),
            ]),
            color_target: ColorTarget::Level,
            show_time: true,
            show_tag: true,
        }
    }

    /// The filter contract in one place: a call produces output iff its
    /// rank is at least the configured minimum. Exposed so callers can skip
    /// building expensive messages that would be dropped anyway.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Core dispatch: filter, render, write one line to stdout.
    ///
    /// The message is accepted as `impl Display` and only stringified after
    /// the filter passes, so a filtered call does no formatting work. Pass
    /// `format_args!(...)` for interpolation without an intermediate
    /// allocation at the call site:
    ///
    /// ```
    /// # use tintlog::{Level, Logger};
    /// # let log = Logger::new(Level::Info, false);
    /// log.log(Level::Info, format_args!("listening on port {}", 8080));
    /// ```
    ///
    /// Write failures are swallowed; console logging is best-effort.
    pub fn log(&self, level: Level, msg: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        let line = self.render(level, &msg.to_string());
        let _ = writeln!(io::stdout(), "{line}");
    }

    pub fn debug(&self, msg: impl fmt::Display) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: impl fmt::Display) {
        self.log(Level::Info, msg);
    }

    pub fn success(&self, msg: impl fmt::Display) {
        self.log(Level::Success, msg);
    }

    pub fn warn(&self, msg: impl fmt::Display) {
        self.log(Level::Warn, msg);
    }

    pub fn error(&self, msg: impl fmt::Display) {
        self.log(Level::Error, msg);
    }

    /// Writes a message with no timestamp, no tag, and no trailing newline;
    /// the caller controls line framing. Wraps in `color` only when a spec
    /// is given and color is enabled. Stdout is flushed so partial lines
    /// appear immediately.
    pub fn raw(&self, msg: &str, color: Option<&ColorSpec>) {
        let mut stdout = io::stdout();
        match color {
            Some(spec) if self.use_color => {
                let _ = write!(stdout, "{}", spec.wrap(msg));
            }
            _ => {
                let _ = write!(stdout, "{msg}");
            }
        }
        let _ = stdout.flush();
    }

    /// The exact line [`Logger::log`] would write for an already rendered
    /// message, minus the trailing newline. Public so formatted output can
    /// be embedded elsewhere or asserted on in tests. Does not filter.
    #[must_use]
    pub fn render(&self, level: Level, message: &str) -> String {
        let name = &self.level_names[level];
        let color = &self.level_colors[level];

        if !self.use_color {
            return self.compose(name, message);
        }

        match self.color_target {
            ColorTarget::Level => self.compose(&color.wrap(name), message),
            ColorTarget::Message => self.compose(name, &color.wrap(message)),
            // The full line is composed exactly as the plain path and then
            // wrapped as one unit, brackets included.
            ColorTarget::Full => color.wrap(&self.compose(name, message)),
            ColorTarget::None => self.compose(name, message),
        }
    }

    /// Plain-path assembly. Each present block is bracketed and followed by
    /// a single space; an absent block takes its brackets and space with it.
    fn compose(&self, name: &str, message: &str) -> String {
        let mut line = String::new();
        if self.show_time {
            line.push('[');
            line.push_str(&Local::now().format(TIMESTAMP_FORMAT).to_string());
            line.push_str("] ");
        }
        if self.show_tag {
            line.push('[');
            line.push_str(name);
            line.push_str("] ");
        }
        line.push_str(message);
        line
    }
}
