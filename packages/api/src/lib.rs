//! proxydial public API
//!
//! Dial TCP tunnels through forward proxies. The three entry points mirror
//! the classic dialer shapes; [`Dialer`] combines timeout and tuning freely.
//!
//! ```no_run
//! use std::io::Write;
//! use std::time::Duration;
//!
//! use proxydial::ProxyProtocol;
//!
//! let mut tunnel = proxydial::dial_timeout(
//!     ProxyProtocol::Http,
//!     "10.0.0.1:8080:alice:secret",
//!     "example.com:443",
//!     Duration::from_secs(5),
//! )?;
//! tunnel.write_all(b"...")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

pub mod builder;

pub use builder::Dialer;

// Re-export the types callers handle from the client package
pub use proxydial_client::{
    Credentials, DialConfig, Error, IpVersion, Kind, Network, ProxyAddress, ProxyProtocol,
    Result, StatusCode, Tunnel, TunnelOption,
};

/// Dial `target` through `proxy_authority` with no time limit and no tuning.
///
/// # Errors
///
/// `InvalidProxyFormat`, `UnsupportedProtocol`, `Connect`, `Write`,
/// `ResponseRead` or `ProxyRejected`; see [`Kind`].
pub fn dial(protocol: ProxyProtocol, proxy_authority: &str, target: &str) -> Result<Tunnel> {
    Dialer::new(protocol).dial(proxy_authority, target)
}

/// Dial with one `timeout` bounding the connect and the handshake.
///
/// # Errors
///
/// As [`dial`], plus `Timeout` when the budget runs out and `InvalidConfig`
/// for a zero timeout.
pub fn dial_timeout(
    protocol: ProxyProtocol,
    proxy_authority: &str,
    target: &str,
    timeout: Duration,
) -> Result<Tunnel> {
    Dialer::new(protocol)
        .timeout(timeout)
        .dial(proxy_authority, target)
}

/// Dial an HTTP CONNECT tunnel over `network` and apply `options` in order.
///
/// # Errors
///
/// As [`dial`], plus `Tune` naming the first option that failed.
pub fn dial_tunable<I>(
    network: Network,
    proxy_authority: &str,
    target: &str,
    options: I,
) -> Result<Tunnel>
where
    I: IntoIterator<Item = TunnelOption>,
{
    Dialer::http()
        .network(network)
        .options(options)
        .dial(proxy_authority, target)
}
