//! Proxy addressing and protocol selection
//!
//! Parses `host:port[:username[:password]]` authority strings and names the
//! proxy protocols the dialer knows about.

pub mod address;
pub mod protocol;

pub use address::{AddressError, Credentials, ProxyAddress};
pub use protocol::{ProxyProtocol, UnknownProtocol};
