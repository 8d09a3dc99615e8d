//! Dial pipeline
//!
//! validate → preflight → open transport → negotiate → tune → `Tunnel`.
//! Every failure after the transport is open drops (closes) it before the
//! error is returned.

use std::io;
use std::net::TcpStream;
use std::time::Instant;

use super::handshake::Handshake;
use super::tcp::{DeadlineStream, TunnelOption, apply_options, clear_timeouts, open_transport};
use super::tunnel::Tunnel;
use crate::config::{DialConfig, Validator};
use crate::error::{self, Result};
use crate::proxy::ProxyProtocol;

/// Establish a tunnel to `target` through the proxy described by `config`.
///
/// When `config.timeout` is set, one deadline bounds the connect and every
/// handshake read and write. It is lifted from the socket before `options`
/// run, so a returned tunnel has no timeouts unless an option sets one.
///
/// # Errors
///
/// See [`crate::error::Kind`] for the classification of failures.
pub fn establish_tunnel(
    protocol: ProxyProtocol,
    config: &DialConfig,
    target: &str,
    options: &[TunnelOption],
) -> Result<Tunnel> {
    config.validate()?;

    let negotiator = protocol.negotiator();
    negotiator.preflight()?;

    let start = Instant::now();
    let deadline = config.deadline_from(start);
    tracing::debug!(
        proxy = %config.proxy,
        target_host = target,
        %protocol,
        timeout = ?config.timeout,
        "dialing through proxy"
    );

    let stream = open_transport(config, deadline)?;

    match negotiate_and_tune(&stream, negotiator, config, target, deadline, options) {
        Ok(()) => {
            tracing::debug!(
                proxy = %config.proxy,
                target_host = target,
                elapsed = ?start.elapsed(),
                "tunnel ready"
            );
            Ok(Tunnel::new(stream, target, protocol))
        }
        Err(err) => {
            tracing::debug!(proxy = %config.proxy, error = %err, "dial failed, closing transport");
            drop(stream);
            Err(err)
        }
    }
}

/// Name reported when the handshake deadline cannot be lifted from the socket.
const CLEAR_DEADLINE: &str = "clear-deadline";

fn deadline_release_error(e: io::Error) -> error::Error {
    error::tune(CLEAR_DEADLINE, e)
}

fn negotiate_and_tune(
    stream: &TcpStream,
    negotiator: &dyn Handshake,
    config: &DialConfig,
    target: &str,
    deadline: Option<Instant>,
    options: &[TunnelOption],
) -> Result<()> {
    let credentials = config.proxy.credentials();

    match deadline {
        Some(deadline) => {
            let mut bounded = DeadlineStream::new(stream, deadline);
            negotiator.negotiate(&mut bounded, target, credentials)?;
            clear_timeouts(stream).map_err(deadline_release_error)?;
        }
        None => {
            let mut unbounded = stream;
            negotiator.negotiate(&mut unbounded, target, credentials)?;
        }
    }

    apply_options(stream, options)
}
