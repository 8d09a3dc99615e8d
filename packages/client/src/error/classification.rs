use std::error::Error as StdError;
use std::io;

use http::StatusCode;

use super::helpers::TimedOut;
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the caller supplied a malformed authority or configuration.
    ///
    /// These are never worth retrying without fixing the input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind(), Kind::InvalidProxyFormat | Kind::InvalidConfig)
    }

    /// Returns true if the requested protocol has no handshake implementation.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), Kind::UnsupportedProtocol(_))
    }

    /// Returns true if the transport connection to the proxy could not be opened.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self.kind(), Kind::Connect)
    }

    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        if matches!(self.kind(), Kind::Timeout) {
            return true;
        }

        let mut source = self.source();

        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            if let Some(io) = err.downcast_ref::<io::Error>() {
                if io.kind() == io::ErrorKind::TimedOut {
                    return true;
                }
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the handshake I/O failed after the transport was opened.
    #[must_use]
    pub fn is_handshake_io(&self) -> bool {
        matches!(self.kind(), Kind::Write | Kind::ResponseRead)
    }

    /// Returns true if the proxy answered but declined the tunnel.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.kind(), Kind::ProxyRejected(_))
    }

    /// Returns true if a tunnel option failed to apply.
    #[must_use]
    pub fn is_tune(&self) -> bool {
        matches!(self.kind(), Kind::Tune(_))
    }

    /// The literal status line of a rejected handshake.
    #[must_use]
    pub fn rejected_status_line(&self) -> Option<&str> {
        match self.kind() {
            Kind::ProxyRejected(line) => Some(line),
            _ => None,
        }
    }

    /// The status code of a rejected handshake, if the status line carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        let line = self.rejected_status_line()?;
        let code = line.split_ascii_whitespace().nth(1)?;
        StatusCode::from_bytes(code.as_bytes()).ok()
    }
}
