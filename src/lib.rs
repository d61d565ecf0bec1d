//! `tintlog` - Leveled console logger with selectable color targets.
//!
//! A small, configurable logger that:
//! - Filters messages by severity against a mutable minimum level
//! - Formats lines with an optional timestamp and bracketed level tag
//! - Wraps the level tag, the message, or the whole line in per-level
//!   ANSI color, selected at runtime
//! - Offers a raw path for unformatted, partial-line output
//!
//! # Example
//!
//! ```
//! use tintlog::{ColorTarget, Level, Logger};
//!
//! let mut log = Logger::new(Level::Debug, true);
//!
//! log.info("Application started");
//! log.warn(format_args!("retrying in {}s", 5));
//!
//! log.color_target = ColorTarget::Message;
//! log.success("deploy finished");
//! ```
//!
//! Every configuration field on [`Logger`] is public and may be changed
//! between any two calls; the next call picks up the new value. The logger
//! holds no other state and provides no internal synchronization: a shared
//! instance needs external locking by the caller.

pub mod fmt;
pub mod level;
pub mod logger;

pub use fmt::{ColorSpec, ColorTarget};
pub use level::{Level, LevelTable, ParseLevelError};
pub use logger::Logger;
