//! Fixtures shared between unit tests: records with nested fields, behavioural
//! members, constant-style names and cycles.
mod common;

pub use common::*;
