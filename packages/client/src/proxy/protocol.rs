//! Proxy protocol selection

use std::fmt;
use std::str::FromStr;

use crate::connect::handshake::{self, Handshake};

/// The handshake spoken to the upstream proxy.
///
/// Only `Http` has a working negotiator; the SOCKS variants are recognised
/// and fail with `UnsupportedProtocol` before any I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProxyProtocol {
    /// HTTP/1.1 `CONNECT`
    #[default]
    Http,
    Socks5,
    Socks4,
}

impl ProxyProtocol {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyProtocol::Http => "http",
            ProxyProtocol::Socks5 => "socks5",
            ProxyProtocol::Socks4 => "socks4",
        }
    }

    /// The handshake strategy for this protocol.
    #[must_use]
    pub fn negotiator(self) -> &'static dyn Handshake {
        handshake::negotiator(self)
    }
}

impl fmt::Display for ProxyProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised protocol name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown proxy protocol: {0}")]
pub struct UnknownProtocol(pub String);

impl FromStr for ProxyProtocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(ProxyProtocol::Http),
            "socks5" => Ok(ProxyProtocol::Socks5),
            "socks4" => Ok(ProxyProtocol::Socks4),
            _ => Err(UnknownProtocol(s.to_owned())),
        }
    }
}
