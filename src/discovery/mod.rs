//! Enumeration of addressable variable paths.
//!
//! Used to answer "what can I watch?": every top-level variable plus every nested
//! data field reachable through maps and [`Record`] objects, joined with `/`.
//!
//! [`Record`]: crate::Record

mod nested_keys;

pub use nested_keys::nested_keys;
