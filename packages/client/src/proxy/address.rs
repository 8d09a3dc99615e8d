//! Proxy authority parsing
//!
//! An authority is a colon-delimited string of at most four fields:
//! `host:port`, `host:port:username` or `host:port:username:password`.
//! Splitting stops after the fourth field, so a password may itself
//! contain colons.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const MAX_FIELDS: usize = 4;

/// Authority parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("expected host:port[:username[:password]], got {0} field(s)")]
    FieldCount(usize),
    #[error("proxy host is empty")]
    EmptyHost,
    #[error("proxy port is empty")]
    EmptyPort,
    #[error("invalid proxy port: {0}")]
    InvalidPort(String),
}

/// Username and password presented to the proxy with `Basic` authorization.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// `base64(username:password)`, the token of a `Basic` authorization header.
    #[must_use]
    pub fn basic_token(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        STANDARD.encode(credentials.as_bytes())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A parsed proxy authority.
///
/// Host and port are always present. Credentials are either absent or carry
/// both a username and a password (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyAddress {
    host: String,
    port: String,
    credentials: Option<Credentials>,
}

impl ProxyAddress {
    /// Parse an authority string.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::FieldCount` for anything other than two to four
    /// fields, and `EmptyHost`/`EmptyPort` when either of those is blank.
    ///
    /// # Examples
    /// ```
    /// use proxydial_client::ProxyAddress;
    ///
    /// let proxy = ProxyAddress::parse("10.0.0.1:8080:alice:secret").unwrap();
    /// assert_eq!(proxy.host(), "10.0.0.1");
    /// assert_eq!(proxy.port(), "8080");
    /// assert_eq!(proxy.username(), Some("alice"));
    /// assert_eq!(proxy.password(), Some("secret"));
    /// ```
    pub fn parse(authority: &str) -> Result<Self, AddressError> {
        let fields: Vec<&str> = authority.splitn(MAX_FIELDS, ':').collect();

        let credentials = match fields.as_slice() {
            [_, _] => None,
            [_, _, username] => Some(Credentials::new(*username, "")),
            [_, _, username, password] => Some(Credentials::new(*username, *password)),
            _ => return Err(AddressError::FieldCount(fields.len())),
        };

        let (host, port) = (fields[0], fields[1]);
        if host.is_empty() {
            return Err(AddressError::EmptyHost);
        }
        if port.is_empty() {
            return Err(AddressError::EmptyPort);
        }

        Ok(Self {
            host: host.to_owned(),
            port: port.to_owned(),
            credentials,
        })
    }

    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            credentials: None,
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// The port as a number, validated only when the address is dialed.
    pub fn port_number(&self) -> Result<u16, AddressError> {
        self.port
            .parse()
            .map_err(|_| AddressError::InvalidPort(self.port.clone()))
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::username)
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::password)
    }
}

impl FromStr for ProxyAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders `host:port`, with the username but never the password.
impl fmt::Display for ProxyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.username() {
            Some(username) => write!(f, "{username}@{}:{}", self.host, self.port),
            None => write!(f, "{}:{}", self.host, self.port),
        }
    }
}
