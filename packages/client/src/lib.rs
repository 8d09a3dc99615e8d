//! # proxydial client
//!
//! Tunnel establishment engine for forward proxies. Given a proxy authority
//! (`host:port[:username[:password]]`) and a target `host:port`, the engine
//! opens a TCP connection to the proxy, negotiates the protocol handshake and
//! returns a [`Tunnel`] that reads and writes as if it were connected to the
//! target directly.
//!
//! ## Features
//!
//! - **HTTP CONNECT** tunnels with optional `Basic` proxy authorization
//! - **Deadline-bounded dials**: one budget covers connect and handshake
//! - **Ordered socket tuning** (no-delay, keep-alive, linger, buffers, deadlines)
//! - **SOCKS4/SOCKS5** strategy slots that fail with `UnsupportedProtocol`
//! - **Classified errors** separating bad input, network faults and proxy rejection
//!
//! ## Usage
//!
//! ```no_run
//! use std::io::{Read, Write};
//! use std::time::Duration;
//!
//! use proxydial_client::{DialConfig, ProxyProtocol, establish_tunnel};
//!
//! let config = DialConfig::from_authority("127.0.0.1:3128:admin:password")?
//!     .with_timeout(Duration::from_secs(5));
//! let mut tunnel = establish_tunnel(ProxyProtocol::Http, &config, "ident.me:80", &[])?;
//!
//! tunnel.write_all(b"GET / HTTP/1.1\r\nHost: ident.me\r\nAccept: */*\r\n\r\n")?;
//! let mut buf = [0u8; 1024];
//! let n = tunnel.read(&mut buf)?;
//! println!("{}", String::from_utf8_lossy(&buf[..n]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod connect;
pub mod error;
pub mod proxy;

pub mod prelude;

pub use crate::prelude::*;
