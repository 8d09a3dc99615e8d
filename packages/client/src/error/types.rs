use std::error::Error as StdError;
use std::fmt;

use crate::proxy::ProxyProtocol;

/// A Result alias where the Err case is `proxydial_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Represents errors that can occur while establishing a proxy tunnel.
///
/// Every error carries a [`Kind`] and, where one exists, the underlying
/// cause (an `io::Error`, a parse error, or one of the marker types in
/// [`crate::error`]) available through [`std::error::Error::source`].
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    source: Option<BoxError>,
}

/// Classification of a dial failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Malformed `host:port[:username[:password]]` authority
    InvalidProxyFormat,
    /// Rejected dial configuration (timeout, network name)
    InvalidConfig,
    /// Handshake for this protocol is not implemented
    UnsupportedProtocol(ProxyProtocol),
    /// Transport connection to the proxy could not be opened
    Connect,
    /// Connect or handshake exceeded the dial deadline
    Timeout,
    /// Writing the handshake request failed
    Write,
    /// Reading the handshake response failed or ended early
    ResponseRead,
    /// The proxy answered with a non-200 status; carries the literal status line
    ProxyRejected(String),
    /// A tunnel option failed to apply; carries the option name
    Tune(&'static str),
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// The classification of this error.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("proxydial::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::InvalidProxyFormat => f.write_str("invalid proxy format")?,
            Kind::InvalidConfig => f.write_str("invalid dial configuration")?,
            Kind::UnsupportedProtocol(protocol) => {
                write!(f, "unsupported proxy protocol: {protocol}")?;
            }
            Kind::Connect => f.write_str("proxy connection failed")?,
            Kind::Timeout => f.write_str("proxy dial timed out")?,
            Kind::Write => f.write_str("error writing handshake request")?,
            Kind::ResponseRead => f.write_str("error reading handshake response")?,
            Kind::ProxyRejected(status_line) => {
                return write!(f, "proxy returned bad status, status line: {status_line}");
            }
            Kind::Tune(option) => write!(f, "failed to apply tunnel option `{option}`")?,
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
