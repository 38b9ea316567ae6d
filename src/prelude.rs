//! Prelude module for the luach crate.
//!
//! Re-exports the derive macros from derive_more used across the calendar types.

#[allow(unused_imports)]
pub use derive_more::Display;
