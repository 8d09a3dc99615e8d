//! Fetch a page through an HTTP CONNECT proxy.
//!
//! ```text
//! cargo run --example dial -- [proxy authority] [target]
//! cargo run --example dial -- 127.0.0.1:3128:admin:password ident.me:80
//! ```
//!
//! Set `RUST_LOG=proxydial_client=debug` to follow the dial.

use std::env;
use std::error::Error;
use std::io::{Read, Write};
use std::time::Duration;

use proxydial::{Dialer, Network, ProxyProtocol, TunnelOption};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let proxy = args
        .next()
        .unwrap_or_else(|| "127.0.0.1:3128:admin:password".to_owned());
    let target = args.next().unwrap_or_else(|| "ident.me:80".to_owned());
    let host = target.split(':').next().unwrap_or(&target).to_owned();

    println!("plain dial through {proxy}");
    let tunnel = proxydial::dial(ProxyProtocol::Http, &proxy, &target)?;
    fetch(tunnel, &host)?;

    println!("dial with a 5s budget");
    let tunnel = proxydial::dial_timeout(
        ProxyProtocol::Http,
        &proxy,
        &target,
        Duration::from_secs(5),
    )?;
    fetch(tunnel, &host)?;

    println!("tuned dial over tcp4");
    let tunnel = proxydial::dial_tunable(
        Network::Tcp4,
        &proxy,
        &target,
        [
            TunnelOption::NoDelay(true),
            TunnelOption::KeepAlive(Duration::from_secs(30)),
        ],
    )?;
    fetch(tunnel, &host)?;

    println!("builder: budget and tuning together");
    let tunnel = Dialer::http()
        .timeout(Duration::from_secs(5))
        .no_delay()
        .linger(true)
        .dial(&proxy, &target)?;
    fetch(tunnel, &host)?;

    Ok(())
}

fn fetch(mut tunnel: proxydial::Tunnel, host: &str) -> Result<(), Box<dyn Error>> {
    write!(
        tunnel,
        "GET / HTTP/1.1\r\nHost: {host}\r\nUser-Agent: proxydial/0.1\r\nAccept: */*\r\nConnection: close\r\n\r\n"
    )?;

    let mut buf = [0u8; 1024];
    let n = tunnel.read(&mut buf)?;
    println!("{}", String::from_utf8_lossy(&buf[..n]));
    Ok(())
}
