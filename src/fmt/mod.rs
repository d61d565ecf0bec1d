//! Color handling is two separate concerns: what the escape sequences are
//! ([`ColorSpec`]) and which span of the line they apply to ([`ColorTarget`]).

mod color;
mod target;

pub use color::ColorSpec;
pub use target::ColorTarget;
