//! TCP transport to the proxy
//!
//! Address resolution, deadline-bounded connect and I/O, and post-handshake
//! socket tuning.

pub mod basic_connection;
pub mod deadline;
pub mod dns_resolution;
pub mod socket_config;

pub use basic_connection::{connect_to_address_list, open_transport};
pub use deadline::{DeadlineStream, clear_timeouts, remaining};
pub use dns_resolution::{resolve_host_sync, resolve_proxy, resolve_with_deadline};
pub use socket_config::{TunnelOption, apply_options};
