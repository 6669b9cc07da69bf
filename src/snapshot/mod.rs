//! Change detection by structural fingerprint.
//!
//! Watches compare whole subsets at poll time instead of tracking per-field
//! changes on the write path: a subset is encoded canonically, hashed, and the
//! hash compared with the previous poll's.

mod canonical;
mod detector;
mod digest;

pub(crate) use canonical::canonical_bytes;
pub(crate) use canonical::float_bits;
pub(crate) use detector::ChangeDetector;
pub use digest::*;

#[cfg(test)]
mod digest_test;
