//! Dial configuration
//!
//! `DialConfig` aggregates the proxy address, address family and time budget
//! of one dial; `validation` checks it before any socket is opened.

pub mod dial;
pub mod network;
pub mod validation;

pub use dial::DialConfig;
pub use network::{IpVersion, Network};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
