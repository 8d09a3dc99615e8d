use std::io::{Read, Write};
use std::time::{Duration, Instant};

use proxydial::{Kind, Network, ProxyProtocol, TunnelOption, dial, dial_timeout, dial_tunable};

#[path = "../support/mock_proxy.rs"]
mod mock_proxy;

use mock_proxy::{MockProxy, closed_port_authority};

const OK: &[u8] = b"HTTP/1.1 200 Connection established\r\n\r\n";

#[test]
fn test_dial_round_trip() {
    let proxy = MockProxy::echoing(&[OK]);
    let mut tunnel = dial(ProxyProtocol::Http, &proxy.authority(), "ident.me:80")
        .expect("Failed to dial through mock proxy");

    tunnel.write_all(b"GET / HTTP/1.1\r\n\r\n").expect("write");
    let mut echoed = vec![0u8; 18];
    tunnel.read_exact(&mut echoed).expect("read");
    assert_eq!(echoed, b"GET / HTTP/1.1\r\n\r\n");

    drop(tunnel);
    let capture = proxy.finish();
    assert!(capture.request.starts_with("CONNECT ident.me:80 HTTP/1.1\r\n"));
}

#[test]
fn test_dial_rejects_bad_authority() {
    let err = dial(ProxyProtocol::Http, "just-a-host", "ident.me:80").expect_err("One field");
    assert_eq!(err.kind(), &Kind::InvalidProxyFormat);
    assert!(err.is_invalid_input());
}

#[test]
fn test_dial_timeout_bounds_silent_proxy() {
    let proxy = MockProxy::silent();
    let start = Instant::now();
    let err = dial_timeout(
        ProxyProtocol::Http,
        &proxy.authority(),
        "google.com:443",
        Duration::from_millis(250),
    )
    .expect_err("Proxy never answers");

    assert!(err.is_timeout());
    assert!(start.elapsed() < Duration::from_secs(3));
}

#[test]
fn test_dial_timeout_unsupported_protocol() {
    let err = dial_timeout(
        ProxyProtocol::Socks5,
        &closed_port_authority(),
        "google.com:443",
        Duration::from_secs(1),
    )
    .expect_err("SOCKS5 is not implemented");
    assert_eq!(err.kind(), &Kind::UnsupportedProtocol(ProxyProtocol::Socks5));
}

#[test]
fn test_dial_tunable_applies_options() {
    let proxy = MockProxy::replying(&[OK]);
    let tunnel = dial_tunable(
        Network::Tcp4,
        &proxy.authority(),
        "example.com:443",
        [TunnelOption::NoDelay(true), TunnelOption::KeepAlive(Duration::from_secs(30))],
    )
    .expect("Failed to dial with options");
    assert!(tunnel.get_ref().nodelay().expect("read no-delay"));
}

#[test]
fn test_dial_tunable_wrong_family() {
    let proxy = MockProxy::replying(&[OK]);
    let err = dial_tunable(Network::Tcp6, &proxy.authority(), "example.com:443", [])
        .expect_err("IPv4 proxy cannot be reached over tcp6");
    assert_eq!(err.kind(), &Kind::Connect);
}

#[test]
fn test_dial_tunable_failing_option() {
    let proxy = MockProxy::replying(&[OK]);
    let err = dial_tunable(
        Network::Tcp,
        &proxy.authority(),
        "example.com:443",
        [TunnelOption::WriteDeadline(Instant::now())],
    )
    .expect_err("Expired deadline cannot be applied");
    assert_eq!(err.kind(), &Kind::Tune("write-deadline"));
    assert!(proxy.finish().client_closed);
}
