//! SOCKS negotiators
//!
//! Recognised protocols without a handshake implementation. Both refuse in
//! `preflight`, so the dialer never opens a socket for them.

use super::{Handshake, Transport};
use crate::error::{self, Result};
use crate::proxy::{Credentials, ProxyProtocol};

/// SOCKS5 negotiator slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Socks5;

/// SOCKS4 negotiator slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Socks4;

fn unsupported(protocol: ProxyProtocol) -> Result<()> {
    tracing::debug!(%protocol, "handshake not implemented");
    Err(error::unsupported_protocol(protocol))
}

impl Handshake for Socks5 {
    fn protocol(&self) -> ProxyProtocol {
        ProxyProtocol::Socks5
    }

    fn preflight(&self) -> Result<()> {
        unsupported(self.protocol())
    }

    fn negotiate(
        &self,
        _stream: &mut dyn Transport,
        _target: &str,
        _credentials: Option<&Credentials>,
    ) -> Result<()> {
        unsupported(self.protocol())
    }
}

impl Handshake for Socks4 {
    fn protocol(&self) -> ProxyProtocol {
        ProxyProtocol::Socks4
    }

    fn preflight(&self) -> Result<()> {
        unsupported(self.protocol())
    }

    fn negotiate(
        &self,
        _stream: &mut dyn Transport,
        _target: &str,
        _credentials: Option<&Credentials>,
    ) -> Result<()> {
        unsupported(self.protocol())
    }
}
