use std::error::Error as StdError;
use std::io;

use proxydial_client::error::{
    self, ConnectionClosed, HeadTooLarge, NoAddresses, TimedOut,
};
use proxydial_client::proxy::AddressError;
use proxydial_client::{Error, Kind, ProxyProtocol, StatusCode};

#[test]
fn test_display_messages() {
    assert_eq!(
        error::invalid_proxy_format(AddressError::EmptyHost).to_string(),
        "invalid proxy format: proxy host is empty"
    );
    assert_eq!(
        error::unsupported_protocol(ProxyProtocol::Socks5).to_string(),
        "unsupported proxy protocol: socks5"
    );
    assert_eq!(
        error::response_read(ConnectionClosed).to_string(),
        "error reading handshake response: connection closed before end of response head"
    );
    assert_eq!(
        error::response_read(HeadTooLarge(16)).to_string(),
        "error reading handshake response: response head exceeds 16 bytes"
    );
    assert_eq!(
        error::connect(NoAddresses("proxy.local".to_owned())).to_string(),
        "proxy connection failed: no usable addresses for proxy.local"
    );
    assert_eq!(
        error::tune("linger", io::Error::other("nope")).to_string(),
        "failed to apply tunnel option `linger`: nope"
    );
    assert_eq!(Error::new(Kind::Timeout).to_string(), "proxy dial timed out");
}

#[test]
fn test_rejected_status_line_is_verbatim() {
    let err = error::proxy_rejected("HTTP/1.0 502 Bad Gateway");
    assert_eq!(
        err.to_string(),
        "proxy returned bad status, status line: HTTP/1.0 502 Bad Gateway"
    );
    assert_eq!(err.rejected_status_line(), Some("HTTP/1.0 502 Bad Gateway"));
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    assert!(err.is_rejected());
    assert!(err.source().is_none());
}

#[test]
fn test_status_of_garbage_line() {
    let err = error::proxy_rejected("garbage");
    assert_eq!(err.status(), None);
    assert_eq!(error::connect(io::Error::other("x")).status(), None);
}

#[test]
fn test_classification() {
    assert!(error::invalid_proxy_format(AddressError::EmptyPort).is_invalid_input());
    assert!(Error::new(Kind::InvalidConfig).is_invalid_input());
    assert!(error::unsupported_protocol(ProxyProtocol::Socks4).is_unsupported());
    assert!(error::connect(io::Error::from(io::ErrorKind::ConnectionRefused)).is_connect());
    assert!(error::write(io::Error::from(io::ErrorKind::BrokenPipe)).is_handshake_io());
    assert!(error::response_read(ConnectionClosed).is_handshake_io());
    assert!(error::tune("no-delay", io::Error::other("x")).is_tune());
    assert!(!error::connect(io::Error::other("x")).is_timeout());
}

#[test]
fn test_timeout_detected_through_source_chain() {
    assert!(error::timeout(TimedOut).is_timeout());

    let io_timeout = io::Error::new(io::ErrorKind::TimedOut, TimedOut);
    assert!(error::connect(io_timeout).is_timeout());

    let nested = error::response_read(error::timeout(TimedOut));
    assert!(nested.is_timeout());
}

#[test]
fn test_source_is_exposed() {
    let err = error::connect(io::Error::from(io::ErrorKind::ConnectionRefused));
    let source = err.source().expect("connect errors carry their cause");
    let io = source.downcast_ref::<io::Error>().expect("cause is an io::Error");
    assert_eq!(io.kind(), io::ErrorKind::ConnectionRefused);
}

#[test]
fn test_conversion_from_address_error() {
    let err: Error = AddressError::FieldCount(1).into();
    assert_eq!(err.kind(), &Kind::InvalidProxyFormat);
}

#[test]
fn test_debug_names_kind() {
    let debug = format!("{:?}", Error::new(Kind::Write));
    assert!(debug.contains("proxydial::Error"));
    assert!(debug.contains("Write"));
}
