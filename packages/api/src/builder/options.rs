//! Tunnel tuning methods
//!
//! Each method appends one `TunnelOption`. Options run after the handshake
//! in the order they were added; the first failure aborts the dial.

use std::time::{Duration, Instant};

use proxydial_client::TunnelOption;

use crate::builder::core::Dialer;

impl Dialer {
    /// Append an arbitrary option.
    #[must_use]
    pub fn option(mut self, option: TunnelOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append several options, preserving their order.
    #[must_use]
    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = TunnelOption>,
    {
        self.options.extend(options);
        self
    }

    /// Send segments as soon as they are written (disable Nagle).
    #[must_use]
    pub fn no_delay(self) -> Self {
        self.option(TunnelOption::NoDelay(true))
    }

    /// Start keep-alive probes after the tunnel idles for `idle`.
    #[must_use]
    pub fn keep_alive(self, idle: Duration) -> Self {
        self.option(TunnelOption::KeepAlive(idle))
    }

    /// Bound reads and writes on the tunnel by `at`.
    #[must_use]
    pub fn deadline(self, at: Instant) -> Self {
        self.option(TunnelOption::Deadline(at))
    }

    #[must_use]
    pub fn read_deadline(self, at: Instant) -> Self {
        self.option(TunnelOption::ReadDeadline(at))
    }

    #[must_use]
    pub fn write_deadline(self, at: Instant) -> Self {
        self.option(TunnelOption::WriteDeadline(at))
    }

    /// `true` resets the connection on close, `false` drains pending data
    /// in the background.
    #[must_use]
    pub fn linger(self, abort: bool) -> Self {
        self.option(TunnelOption::Linger { abort })
    }

    /// OS receive buffer size in bytes.
    #[must_use]
    pub fn read_buffer(self, bytes: usize) -> Self {
        self.option(TunnelOption::ReadBuffer(bytes))
    }

    /// OS transmit buffer size in bytes.
    #[must_use]
    pub fn write_buffer(self, bytes: usize) -> Self {
        self.option(TunnelOption::WriteBuffer(bytes))
    }
}
