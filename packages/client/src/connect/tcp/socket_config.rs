//! Post-handshake socket tuning
//!
//! A `TunnelOption` is one named mutation of an established connection.
//! Options run in the order given; the first failure aborts and nothing
//! already applied is rolled back.

use std::fmt;
use std::io;
use std::net::TcpStream;
use std::sync::Arc;
use std::time::{Duration, Instant};

use socket2::{SockRef, TcpKeepalive};

use super::deadline::remaining;
use crate::error::{self, Result};

type CustomTune = Arc<dyn Fn(&TcpStream) -> io::Result<()> + Send + Sync>;

/// A socket-level behaviour applied to a tunnel after the handshake.
#[derive(Clone)]
pub enum TunnelOption {
    /// `true` sends segments immediately; `false` lets the OS coalesce (Nagle).
    NoDelay(bool),
    /// Enable keep-alive probes after the connection idles this long.
    KeepAlive(Duration),
    /// Bound both reads and writes by an absolute instant.
    Deadline(Instant),
    ReadDeadline(Instant),
    WriteDeadline(Instant),
    /// `abort: true` resets the connection on close; `false` drains pending
    /// data in the background.
    Linger { abort: bool },
    /// OS receive buffer size in bytes.
    ReadBuffer(usize),
    /// OS transmit buffer size in bytes.
    WriteBuffer(usize),
    /// Caller-supplied mutation.
    Custom { name: &'static str, apply: CustomTune },
}

impl TunnelOption {
    /// Wrap a closure as a named option.
    pub fn custom<F>(name: &'static str, apply: F) -> Self
    where
        F: Fn(&TcpStream) -> io::Result<()> + Send + Sync + 'static,
    {
        TunnelOption::Custom {
            name,
            apply: Arc::new(apply),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TunnelOption::NoDelay(_) => "no-delay",
            TunnelOption::KeepAlive(_) => "keep-alive",
            TunnelOption::Deadline(_) => "deadline",
            TunnelOption::ReadDeadline(_) => "read-deadline",
            TunnelOption::WriteDeadline(_) => "write-deadline",
            TunnelOption::Linger { .. } => "linger",
            TunnelOption::ReadBuffer(_) => "read-buffer",
            TunnelOption::WriteBuffer(_) => "write-buffer",
            TunnelOption::Custom { name, .. } => *name,
        }
    }

    /// Apply this option to `stream`.
    ///
    /// A deadline that has already passed fails with `io::ErrorKind::TimedOut`.
    pub fn apply(&self, stream: &TcpStream) -> io::Result<()> {
        match self {
            TunnelOption::NoDelay(enabled) => stream.set_nodelay(*enabled),
            TunnelOption::KeepAlive(idle) => {
                SockRef::from(stream).set_tcp_keepalive(&TcpKeepalive::new().with_time(*idle))
            }
            TunnelOption::Deadline(at) => {
                let left = remaining(*at)?;
                stream.set_read_timeout(Some(left))?;
                stream.set_write_timeout(Some(left))
            }
            TunnelOption::ReadDeadline(at) => stream.set_read_timeout(Some(remaining(*at)?)),
            TunnelOption::WriteDeadline(at) => stream.set_write_timeout(Some(remaining(*at)?)),
            TunnelOption::Linger { abort } => {
                let linger = if *abort { Some(Duration::ZERO) } else { None };
                SockRef::from(stream).set_linger(linger)
            }
            TunnelOption::ReadBuffer(bytes) => SockRef::from(stream).set_recv_buffer_size(*bytes),
            TunnelOption::WriteBuffer(bytes) => SockRef::from(stream).set_send_buffer_size(*bytes),
            TunnelOption::Custom { apply, .. } => apply(stream),
        }
    }
}

impl fmt::Debug for TunnelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TunnelOption::NoDelay(enabled) => f.debug_tuple("NoDelay").field(enabled).finish(),
            TunnelOption::KeepAlive(idle) => f.debug_tuple("KeepAlive").field(idle).finish(),
            TunnelOption::Deadline(at) => f.debug_tuple("Deadline").field(at).finish(),
            TunnelOption::ReadDeadline(at) => f.debug_tuple("ReadDeadline").field(at).finish(),
            TunnelOption::WriteDeadline(at) => f.debug_tuple("WriteDeadline").field(at).finish(),
            TunnelOption::Linger { abort } => {
                f.debug_struct("Linger").field("abort", abort).finish()
            }
            TunnelOption::ReadBuffer(bytes) => f.debug_tuple("ReadBuffer").field(bytes).finish(),
            TunnelOption::WriteBuffer(bytes) => f.debug_tuple("WriteBuffer").field(bytes).finish(),
            TunnelOption::Custom { name, .. } => {
                f.debug_struct("Custom").field("name", name).finish_non_exhaustive()
            }
        }
    }
}

/// Apply `options` to `stream` in order, stopping at the first failure.
pub fn apply_options(stream: &TcpStream, options: &[TunnelOption]) -> Result<()> {
    for option in options {
        tracing::trace!(option = option.name(), "applying tunnel option");
        option.apply(stream).map_err(|e| {
            tracing::debug!("Failed to apply tunnel option {}: {}", option.name(), e);
            error::tune(option.name(), e)
        })?;
    }
    Ok(())
}
