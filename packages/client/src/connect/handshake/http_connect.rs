//! HTTP CONNECT tunnel establishment
//!
//! Sends a `CONNECT` request with optional `Basic` proxy authorization and
//! accepts the tunnel when the status line carries ` 200 `. Header lines
//! after the status line are consumed but not validated.

use super::response::{is_success, read_response_head, status_line};
use super::{Handshake, Transport};
use crate::error::{self, Result};
use crate::proxy::{Credentials, ProxyProtocol};

/// HTTP/1.1 `CONNECT` negotiator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnect;

/// Build the `CONNECT` request for `target` (`host:port`).
#[must_use]
pub fn build_connect_request(target: &str, credentials: Option<&Credentials>) -> String {
    let auth = match credentials {
        Some(credentials) => format!(
            "Proxy-Authorization: Basic {}\r\n",
            credentials.basic_token()
        ),
        None => String::new(),
    };

    format!(
        "CONNECT {target} HTTP/1.1\r\n\
         Host: {target}\r\n\
         {auth}\
         Connection: Keep-Alive\r\n\
         Proxy-Connection: keep-alive\r\n\r\n"
    )
}

impl Handshake for HttpConnect {
    fn protocol(&self) -> ProxyProtocol {
        ProxyProtocol::Http
    }

    fn negotiate(
        &self,
        stream: &mut dyn Transport,
        target: &str,
        credentials: Option<&Credentials>,
    ) -> Result<()> {
        let request = build_connect_request(target, credentials);
        tracing::trace!(
            target_host = target,
            authorized = credentials.is_some(),
            "sending CONNECT request"
        );

        stream
            .write_all(request.as_bytes())
            .map_err(error::from_write)?;
        stream.flush().map_err(error::from_write)?;

        let head = read_response_head(stream)?;
        let head = String::from_utf8_lossy(&head);
        let status = status_line(&head);

        if !is_success(status) {
            tracing::debug!(target_host = target, status, "proxy rejected CONNECT");
            return Err(error::proxy_rejected(status));
        }

        tracing::debug!(target_host = target, status, "CONNECT tunnel established");
        Ok(())
    }
}
