//! Dialer builder API modules
//!
//! Provides the fluent API for configuring and running proxy dials.

pub mod core;
pub mod options;

pub use self::core::*;
