use std::fmt;

/// A marker type to indicate that the dial deadline passed.
#[derive(Debug)]
pub struct TimedOut;

impl fmt::Display for TimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("deadline exceeded")
    }
}

impl std::error::Error for TimedOut {}

/// A marker type to indicate that the proxy closed the connection
/// before the response head was complete.
#[derive(Debug)]
pub struct ConnectionClosed;

impl fmt::Display for ConnectionClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection closed before end of response head")
    }
}

impl std::error::Error for ConnectionClosed {}

/// A marker type to indicate that the response head exceeded the size limit.
#[derive(Debug)]
pub struct HeadTooLarge(pub usize);

impl fmt::Display for HeadTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "response head exceeds {} bytes", self.0)
    }
}

impl std::error::Error for HeadTooLarge {}

/// A marker type to indicate that no resolved address matched the
/// requested IP version.
#[derive(Debug)]
pub struct NoAddresses(pub String);

impl fmt::Display for NoAddresses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no usable addresses for {}", self.0)
    }
}

impl std::error::Error for NoAddresses {}
