//! Proxy handshake strategies
//!
//! Each protocol implements [`Handshake`]; [`negotiator`] selects the
//! strategy for a [`ProxyProtocol`]. Adding a protocol means adding a
//! strategy here, callers stay unchanged.

use std::io::{Read, Write};

pub mod http_connect;
pub mod response;
pub mod socks_protocol;

pub use http_connect::{HttpConnect, build_connect_request};
pub use response::{MAX_HEAD_LEN, read_response_head};
pub use socks_protocol::{Socks4, Socks5};

use crate::error::Result;
use crate::proxy::{Credentials, ProxyProtocol};

/// Byte stream a handshake runs over.
pub trait Transport: Read + Write {}

impl<T: Read + Write + ?Sized> Transport for T {}

/// A protocol-specific tunnel negotiation.
pub trait Handshake: Send + Sync {
    fn protocol(&self) -> ProxyProtocol;

    /// Checked before the transport is opened; an error here means no I/O happens.
    fn preflight(&self) -> Result<()> {
        Ok(())
    }

    /// Send the request for `target` and consume the proxy's answer.
    ///
    /// On success the stream is positioned at the first tunneled byte.
    fn negotiate(
        &self,
        stream: &mut dyn Transport,
        target: &str,
        credentials: Option<&Credentials>,
    ) -> Result<()>;
}

static HTTP: HttpConnect = HttpConnect;
static SOCKS5: Socks5 = Socks5;
static SOCKS4: Socks4 = Socks4;

/// The handshake strategy for `protocol`.
#[must_use]
pub fn negotiator(protocol: ProxyProtocol) -> &'static dyn Handshake {
    match protocol {
        ProxyProtocol::Http => &HTTP,
        ProxyProtocol::Socks5 => &SOCKS5,
        ProxyProtocol::Socks4 => &SOCKS4,
    }
}
