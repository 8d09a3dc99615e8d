//! Proxy tunnel establishment
//!
//! Opens the transport to the proxy, runs the protocol handshake and hands
//! back a [`Tunnel`]. The pieces are usable on their own:
//!
//! - `tcp`: resolution, deadline-bounded connect and I/O, socket tuning
//! - `handshake`: per-protocol negotiators and the response-head reader
//! - `tunnel`: the returned connection handle
//! - `dialer`: the pipeline tying them together

pub mod dialer;
pub mod handshake;
pub mod tcp;
pub mod tunnel;

pub use dialer::establish_tunnel;
pub use handshake::{Handshake, HttpConnect, Socks4, Socks5, Transport, negotiator};
pub use tcp::{TunnelOption, apply_options, open_transport};
pub use tunnel::Tunnel;
