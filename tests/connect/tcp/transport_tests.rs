use std::net::{SocketAddr, TcpListener};
use std::thread;
use std::time::{Duration, Instant};

use proxydial_client::Kind;
use proxydial_client::config::{DialConfig, IpVersion};
use proxydial_client::connect::tcp::{
    connect_to_address_list, open_transport, remaining, resolve_host_sync, resolve_proxy,
    resolve_with_deadline,
};
use proxydial_client::proxy::ProxyAddress;

#[test]
fn test_resolve_ip_literal() {
    let addrs = resolve_host_sync("127.0.0.1", 3128).expect("Failed to resolve IP literal");
    assert_eq!(addrs, vec!["127.0.0.1:3128".parse::<SocketAddr>().expect("valid address")]);
}

#[test]
fn test_resolve_localhost() {
    let addrs = resolve_host_sync("localhost", 80).expect("Failed to resolve localhost");
    assert!(!addrs.is_empty());
    assert!(addrs.iter().all(|addr| addr.port() == 80));
}

#[test]
fn test_resolve_proxy_rejects_bad_port() {
    let proxy = ProxyAddress::parse("127.0.0.1:notaport").expect("parse defers port validation");
    let err = resolve_proxy(&proxy, None, None).expect_err("Non-numeric port must fail");
    assert_eq!(err.kind(), &Kind::InvalidProxyFormat);
}

#[test]
fn test_resolve_proxy_filters_family() {
    let proxy = ProxyAddress::parse("127.0.0.1:3128").expect("Failed to parse authority");
    let v4 = resolve_proxy(&proxy, Some(IpVersion::V4), None).expect("v4 literal matches v4");
    assert_eq!(v4.len(), 1);

    let err = resolve_proxy(&proxy, Some(IpVersion::V6), None).expect_err("v4 literal has no v6 address");
    assert!(err.is_connect());
}

#[test]
fn test_open_transport_connects() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let authority = listener.local_addr().expect("listener address").to_string();
    let config = DialConfig::from_authority(&authority).expect("Failed to build config");

    let stream = open_transport(&config, Some(Instant::now() + Duration::from_secs(5)))
        .expect("Failed to connect to local listener");
    assert_eq!(
        stream.peer_addr().expect("peer address"),
        listener.local_addr().expect("listener address")
    );
}

#[test]
fn test_refused_connection_is_connect_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let err = connect_to_address_list(&[addr], None).expect_err("Nothing listens on a closed port");
    assert_eq!(err.kind(), &Kind::Connect);
    assert!(!err.is_timeout());
}

#[test]
fn test_empty_address_list() {
    let err = connect_to_address_list(&[], None).expect_err("No addresses to try");
    assert!(err.is_connect());
}

#[test]
fn test_expired_deadline_fails_before_connecting() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("listener address");

    let err = connect_to_address_list(&[addr], Some(Instant::now())).expect_err("Budget is spent");
    assert_eq!(err.kind(), &Kind::Timeout);
    assert!(err.is_timeout());
}

#[test]
fn test_remaining_budget() {
    let left = remaining(Instant::now() + Duration::from_secs(60)).expect("Budget left");
    assert!(left > Duration::from_secs(59));

    let err = remaining(Instant::now()).expect_err("Budget is spent");
    assert_eq!(err.kind(), std::io::ErrorKind::TimedOut);
}

#[test]
fn test_slow_resolver_is_bounded_by_deadline() {
    let start = Instant::now();
    let err = resolve_with_deadline(
        || {
            thread::sleep(Duration::from_secs(3));
            Ok(vec!["127.0.0.1:3128".parse().expect("valid address")])
        },
        start + Duration::from_millis(200),
    )
    .expect_err("Lookup outlasts the budget");

    assert_eq!(err.kind(), &Kind::Timeout);
    assert!(err.is_timeout());
    assert!(start.elapsed() < Duration::from_secs(1), "returned after {:?}", start.elapsed());
}

#[test]
fn test_fast_resolver_result_is_returned() {
    let expected: SocketAddr = "127.0.0.1:3128".parse().expect("valid address");
    let addrs = resolve_with_deadline(
        move || Ok(vec![expected]),
        Instant::now() + Duration::from_secs(5),
    )
    .expect("Lookup finishes in time");
    assert_eq!(addrs, vec![expected]);
}

#[test]
fn test_resolver_error_is_passed_through() {
    let err = resolve_with_deadline(
        || resolve_host_sync("invalid.nonexistent.domain.test", 80),
        Instant::now() + Duration::from_secs(30),
    )
    .expect_err("Unknown host fails");
    assert_eq!(err.kind(), &Kind::Connect);
}

#[test]
fn test_spent_budget_skips_lookup() {
    let err = resolve_with_deadline(|| unreachable!("lookup must not start"), Instant::now())
        .expect_err("Budget is spent");
    assert_eq!(err.kind(), &Kind::Timeout);
}

#[test]
fn test_resolve_proxy_hostname_under_deadline() {
    let proxy = ProxyAddress::parse("localhost:3128").expect("Failed to parse authority");
    let addrs = resolve_proxy(&proxy, None, Some(Instant::now() + Duration::from_secs(30)))
        .expect("Failed to resolve localhost under a deadline");
    assert!(addrs.iter().all(|addr| addr.port() == 3128));
}
