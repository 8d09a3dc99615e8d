use std::io;

use super::constructors;
use super::types::Error;
use crate::config::validation::ConfigurationError;
use crate::proxy::AddressError;

impl From<AddressError> for Error {
    fn from(error: AddressError) -> Self {
        constructors::invalid_proxy_format(error)
    }
}

impl From<ConfigurationError> for Error {
    fn from(error: ConfigurationError) -> Self {
        constructors::invalid_config(error)
    }
}

/// Both kinds are produced by an expired socket timeout, depending on platform.
fn is_deadline(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}

/// Classify an I/O failure while writing the handshake request.
pub(crate) fn from_write(error: io::Error) -> Error {
    if is_deadline(&error) {
        constructors::timeout(error)
    } else {
        constructors::write(error)
    }
}

/// Classify an I/O failure while reading the handshake response.
pub(crate) fn from_read(error: io::Error) -> Error {
    if is_deadline(&error) {
        constructors::timeout(error)
    } else {
        constructors::response_read(error)
    }
}

/// Classify an I/O failure while connecting to the proxy.
pub(crate) fn from_connect(error: io::Error) -> Error {
    if is_deadline(&error) {
        constructors::timeout(error)
    } else {
        constructors::connect(error)
    }
}
