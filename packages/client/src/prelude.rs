//! proxydial prelude
//!
//! The types a caller needs to dial a proxy and use the resulting tunnel.

// Addressing and protocol selection
pub use crate::proxy::{Credentials, ProxyAddress, ProxyProtocol};

// Dial configuration
pub use crate::config::{DialConfig, IpVersion, Network};

// Dialing, tuning and the tunnel handle
pub use crate::connect::{Tunnel, TunnelOption, establish_tunnel};

// Error types
pub use crate::error::{Error, Kind, Result};

// Status codes surfaced by rejected handshakes
pub use ::http::StatusCode;
