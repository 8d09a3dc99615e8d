//! Address family selection

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use super::validation::ConfigurationError;

/// IP version a dial is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    #[must_use]
    pub fn matches(self, addr: &SocketAddr) -> bool {
        match self {
            IpVersion::V4 => addr.is_ipv4(),
            IpVersion::V6 => addr.is_ipv6(),
        }
    }
}

/// Network name in the `tcp`/`tcp4`/`tcp6` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Either address family
    #[default]
    Tcp,
    Tcp4,
    Tcp6,
}

impl Network {
    #[must_use]
    pub fn ip_version(self) -> Option<IpVersion> {
        match self {
            Network::Tcp => None,
            Network::Tcp4 => Some(IpVersion::V4),
            Network::Tcp6 => Some(IpVersion::V6),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Tcp => "tcp",
            Network::Tcp4 => "tcp4",
            Network::Tcp6 => "tcp6",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Network::Tcp),
            "tcp4" => Ok(Network::Tcp4),
            "tcp6" => Ok(Network::Tcp6),
            other => Err(ConfigurationError::InvalidNetwork(format!(
                "expected tcp, tcp4 or tcp6, got {other:?}"
            ))),
        }
    }
}
