//! Proxy address resolution
//!
//! Resolves the proxy host with an IP-literal fast path and filters the
//! result by the requested IP version. Under a dial deadline the system
//! resolver runs on a helper thread so a slow lookup cannot outlast the budget.

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::str::FromStr;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{RecvTimeoutError, bounded};

use super::deadline::remaining;
use crate::config::IpVersion;
use crate::error::{self, NoAddresses, Result, TimedOut};
use crate::proxy::ProxyAddress;

/// Resolve hostname to socket addresses synchronously.
pub fn resolve_host_sync(host: &str, port: u16) -> Result<Vec<SocketAddr>> {
    // Fast path for IP addresses
    if let Ok(ip) = IpAddr::from_str(host) {
        return Ok(vec![SocketAddr::new(ip, port)]);
    }

    match (host, port).to_socket_addrs() {
        Ok(addrs) => {
            let addr_vec: Vec<SocketAddr> = addrs.collect();
            if addr_vec.is_empty() {
                Err(error::connect(NoAddresses(host.to_owned())))
            } else {
                Ok(addr_vec)
            }
        }
        Err(e) => {
            tracing::debug!("DNS resolution failed for {host}: {e}");
            Err(error::connect(e))
        }
    }
}

/// Run `resolve` on a helper thread and wait for it until `deadline`.
///
/// On expiry the lookup is abandoned; its thread finishes in the background
/// and its result is discarded.
pub fn resolve_with_deadline<F>(resolve: F, deadline: Instant) -> Result<Vec<SocketAddr>>
where
    F: FnOnce() -> Result<Vec<SocketAddr>> + Send + 'static,
{
    let budget = remaining(deadline).map_err(error::timeout)?;
    let (tx, rx) = bounded(1);

    thread::Builder::new()
        .name("proxydial-resolve".to_owned())
        .spawn(move || {
            // The receiver is gone once the dial has timed out.
            let _ = tx.send(resolve());
        })
        .map_err(error::connect)?;

    match rx.recv_timeout(budget) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            tracing::debug!(?budget, "proxy resolution exceeded dial deadline");
            Err(error::timeout(TimedOut))
        }
        Err(RecvTimeoutError::Disconnected) => Err(error::connect(NoAddresses(
            "resolver thread exited without a result".to_owned(),
        ))),
    }
}

/// Resolve the proxy authority, keeping only addresses of `ip_version`.
///
/// With a `deadline`, hostname lookups are bounded by it; IP literals never
/// touch the resolver.
pub fn resolve_proxy(
    proxy: &ProxyAddress,
    ip_version: Option<IpVersion>,
    deadline: Option<Instant>,
) -> Result<Vec<SocketAddr>> {
    let port = proxy.port_number()?;
    let mut addrs = match deadline {
        Some(deadline) if IpAddr::from_str(proxy.host()).is_err() => {
            let host = proxy.host().to_owned();
            resolve_with_deadline(move || resolve_host_sync(&host, port), deadline)?
        }
        _ => resolve_host_sync(proxy.host(), port)?,
    };

    if let Some(version) = ip_version {
        addrs.retain(|addr| version.matches(addr));
        if addrs.is_empty() {
            return Err(error::connect(NoAddresses(format!(
                "{} ({version:?})",
                proxy.host()
            ))));
        }
    }

    Ok(addrs)
}
