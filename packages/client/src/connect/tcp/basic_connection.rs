//! Transport connection to the proxy
//!
//! Opens the raw TCP connection a handshake runs over, either unbounded or
//! within the time left until a dial deadline.

use std::net::{SocketAddr, TcpStream};
use std::time::Instant;

use super::deadline::remaining;
use super::dns_resolution::resolve_proxy;
use crate::config::DialConfig;
use crate::error::{self, NoAddresses, Result};

/// Connect to the first reachable address.
///
/// With a deadline, each attempt gets only the time left and an exhausted
/// budget ends the walk with `Timeout`. Without one, attempts block for as
/// long as the OS allows.
pub fn connect_to_address_list(
    addrs: &[SocketAddr],
    deadline: Option<Instant>,
) -> Result<TcpStream> {
    let mut last_error = None;

    for addr in addrs {
        let attempt = match deadline {
            Some(deadline) => {
                let budget = remaining(deadline).map_err(error::timeout)?;
                TcpStream::connect_timeout(addr, budget)
            }
            None => TcpStream::connect(addr),
        };

        match attempt {
            Ok(stream) => {
                tracing::debug!("Connected to proxy at {}", addr);
                return Ok(stream);
            }
            Err(e) => {
                // Log error and continue to next address
                tracing::debug!("Failed to connect to {}: {}", addr, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(error::from_connect(e)),
        None => Err(error::connect(NoAddresses("empty address list".to_owned()))),
    }
}

/// Resolve and connect to the proxy named by `config`.
///
/// Resolution time counts against the deadline.
pub fn open_transport(config: &DialConfig, deadline: Option<Instant>) -> Result<TcpStream> {
    let addrs = resolve_proxy(&config.proxy, config.ip_version, deadline)?;
    tracing::trace!(proxy = %config.proxy, candidates = addrs.len(), "resolved proxy");
    connect_to_address_list(&addrs, deadline)
}
