//! Command line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use proxydial::ProxyProtocol;

use crate::checker::CheckSettings;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "proxycheck",
    version,
    about = "Check a proxy list by dialing a probe target through each entry",
    long_about = None
)]
pub struct Args {
    /// File with one proxy per line (host:port[:username[:password]])
    #[arg(short = 'p', long = "proxies", default_value = "proxies.txt")]
    pub proxy_file: PathBuf,

    /// Number of proxies checked concurrently (at least 1)
    #[arg(short = 't', long, default_value_t = 100, value_parser = parse_threads)]
    pub threads: usize,

    /// File the working proxies are written to
    #[arg(short = 'o', long = "output", default_value = "valid.txt")]
    pub output_file: PathBuf,

    /// host:port dialed through each proxy
    #[arg(long, default_value = "google.com:443")]
    pub target: String,

    /// Seconds allowed for connect plus handshake (at least 1)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Proxy protocol (http, socks5, socks4)
    #[arg(long, default_value = "http")]
    pub protocol: ProxyProtocol,
}

fn parse_threads(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_owned()),
        Ok(threads) => Ok(threads),
        Err(e) => Err(e.to_string()),
    }
}

impl Args {
    #[must_use]
    pub fn settings(&self) -> CheckSettings {
        CheckSettings {
            protocol: self.protocol,
            target: self.target.clone(),
            timeout: Duration::from_secs(self.timeout),
            threads: self.threads,
        }
    }
}
