//! Per-dial configuration

use std::time::{Duration, Instant};

use super::network::IpVersion;
use super::validation::{ConfigResult, ConfigValidator, Validator};
use crate::proxy::ProxyAddress;

/// Parameters of a single dial attempt. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialConfig {
    /// Restrict resolved proxy addresses to one family; `None` tries all.
    pub ip_version: Option<IpVersion>,
    pub proxy: ProxyAddress,
    /// Budget for connect plus handshake; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl DialConfig {
    pub fn new(proxy: ProxyAddress) -> Self {
        Self {
            ip_version: None,
            proxy,
            timeout: None,
        }
    }

    /// Parse `host:port[:username[:password]]` into an unbounded config.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidProxyFormat` error for a malformed authority.
    pub fn from_authority(authority: &str) -> crate::Result<Self> {
        Ok(Self::new(ProxyAddress::parse(authority)?))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_ip_version(mut self, ip_version: Option<IpVersion>) -> Self {
        self.ip_version = ip_version;
        self
    }

    /// Absolute deadline of a dial that starts at `start`.
    ///
    /// A timeout too large to represent as an `Instant` leaves the dial unbounded.
    #[must_use]
    pub fn deadline_from(&self, start: Instant) -> Option<Instant> {
        self.timeout.and_then(|timeout| start.checked_add(timeout))
    }
}

impl Validator for DialConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(timeout) = self.timeout {
            ConfigValidator::validate_timeout(timeout, "dial timeout")?;
        }
        Ok(())
    }
}
