//! Core `Dialer` structure and dialing
//!
//! Holds the protocol, time budget, address family and tunnel options of a
//! dial. A `Dialer` is reusable: every `dial` call parses its own authority
//! and produces one independent tunnel.

use std::time::Duration;

use proxydial_client::{
    DialConfig, IpVersion, Network, ProxyAddress, ProxyProtocol, Result, Tunnel, TunnelOption,
    establish_tunnel,
};

/// Fluent builder for proxy dials.
///
/// Timeout and tuning options combine freely.
///
/// # Examples
/// ```no_run
/// use std::time::Duration;
/// use proxydial::Dialer;
///
/// let tunnel = Dialer::http()
///     .timeout(Duration::from_secs(5))
///     .no_delay()
///     .keep_alive(Duration::from_secs(30))
///     .dial("127.0.0.1:3128:admin:password", "example.com:443")?;
/// # Ok::<(), proxydial::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dialer {
    pub(crate) protocol: ProxyProtocol,
    pub(crate) timeout: Option<Duration>,
    pub(crate) ip_version: Option<IpVersion>,
    pub(crate) options: Vec<TunnelOption>,
}

impl Dialer {
    /// Start a dialer for `protocol` with no timeout and no options.
    #[must_use]
    pub fn new(protocol: ProxyProtocol) -> Self {
        Self {
            protocol,
            ..Self::default()
        }
    }

    /// Shorthand for `Dialer::new(ProxyProtocol::Http)`
    #[must_use]
    pub fn http() -> Self {
        Self::new(ProxyProtocol::Http)
    }

    /// Bound connect and handshake by one budget.
    ///
    /// The budget is measured from the start of each `dial` call.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Restrict the proxy connection to the family named by `network`.
    #[must_use]
    pub fn network(mut self, network: Network) -> Self {
        self.ip_version = network.ip_version();
        self
    }

    #[must_use]
    pub fn ip_version(mut self, ip_version: IpVersion) -> Self {
        self.ip_version = Some(ip_version);
        self
    }

    #[must_use]
    pub fn protocol(&self) -> ProxyProtocol {
        self.protocol
    }

    #[must_use]
    pub fn tunnel_options(&self) -> &[TunnelOption] {
        &self.options
    }

    /// Dial `target` through the proxy at `proxy_authority`
    /// (`host:port[:username[:password]]`).
    ///
    /// # Errors
    ///
    /// Fails with `InvalidProxyFormat` for a malformed authority, otherwise
    /// as described by [`proxydial_client::Kind`].
    pub fn dial(&self, proxy_authority: &str, target: &str) -> Result<Tunnel> {
        let proxy = ProxyAddress::parse(proxy_authority)?;
        self.dial_address(proxy, target)
    }

    /// Dial `target` through an already parsed proxy address.
    ///
    /// # Errors
    ///
    /// As [`Dialer::dial`], minus authority parsing.
    pub fn dial_address(&self, proxy: ProxyAddress, target: &str) -> Result<Tunnel> {
        tracing::debug!(
            protocol = %self.protocol,
            proxy = %proxy,
            target_host = target,
            timeout = ?self.timeout,
            options = self.options.len(),
            "dialing through proxy"
        );
        establish_tunnel(self.protocol, &self.config(proxy), target, &self.options)
    }

    /// The `DialConfig` this dialer produces for `proxy`.
    #[must_use]
    pub fn config(&self, proxy: ProxyAddress) -> DialConfig {
        let config = DialConfig::new(proxy).with_ip_version(self.ip_version);
        match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}
