use super::types::{BoxError, Error, Kind};
use crate::proxy::ProxyProtocol;

/// Creates an `Error` for a malformed proxy authority.
pub fn invalid_proxy_format<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidProxyFormat).with(e.into())
}

/// Creates an `Error` for a rejected dial configuration.
pub fn invalid_config<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidConfig).with(e.into())
}

/// Creates an `Error` for a protocol without a handshake implementation.
pub fn unsupported_protocol(protocol: ProxyProtocol) -> Error {
    Error::new(Kind::UnsupportedProtocol(protocol))
}

/// Creates an `Error` for a failed transport connect.
pub fn connect<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Connect).with(e.into())
}

/// Creates an `Error` for an expired dial deadline.
pub fn timeout<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Timeout).with(e.into())
}

/// Creates an `Error` for a failed handshake request write.
pub fn write<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Write).with(e.into())
}

/// Creates an `Error` for a failed handshake response read.
pub fn response_read<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::ResponseRead).with(e.into())
}

/// Creates an `Error` for a proxy that declined the tunnel.
pub fn proxy_rejected(status_line: impl Into<String>) -> Error {
    Error::new(Kind::ProxyRejected(status_line.into()))
}

/// Creates an `Error` for a tunnel option that failed to apply.
pub fn tune<E: Into<BoxError>>(option: &'static str, e: E) -> Error {
    Error::new(Kind::Tune(option)).with(e.into())
}
