//! The established tunnel handle

use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

use crate::proxy::ProxyProtocol;

/// A live connection through a proxy to `target`.
///
/// Reads and writes go straight to the underlying socket; the engine does no
/// further I/O on it once returned. Dropping the tunnel closes the socket.
#[derive(Debug)]
pub struct Tunnel {
    stream: TcpStream,
    target: String,
    protocol: ProxyProtocol,
}

impl Tunnel {
    pub(crate) fn new(stream: TcpStream, target: &str, protocol: ProxyProtocol) -> Self {
        Self {
            stream,
            target: target.to_owned(),
            protocol,
        }
    }

    /// The `host:port` the proxy was asked to connect to.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn protocol(&self) -> ProxyProtocol {
        self.protocol
    }

    /// Address of the proxy end of the socket.
    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.stream.peer_addr()
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.stream.local_addr()
    }

    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.stream.set_read_timeout(timeout)
    }

    pub fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.stream.set_write_timeout(timeout)
    }

    pub fn shutdown(&self, how: Shutdown) -> io::Result<()> {
        self.stream.shutdown(how)
    }

    /// A second handle to the same socket, e.g. for a reader thread.
    pub fn try_clone(&self) -> io::Result<TcpStream> {
        self.stream.try_clone()
    }

    #[must_use]
    pub fn get_ref(&self) -> &TcpStream {
        &self.stream
    }

    #[must_use]
    pub fn into_inner(self) -> TcpStream {
        self.stream
    }
}

impl From<Tunnel> for TcpStream {
    fn from(tunnel: Tunnel) -> Self {
        tunnel.into_inner()
    }
}

impl Read for Tunnel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for Tunnel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

impl Read for &Tunnel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (&self.stream).read(buf)
    }
}

impl Write for &Tunnel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&self.stream).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&self.stream).flush()
    }
}

#[cfg(unix)]
impl std::os::fd::AsFd for Tunnel {
    fn as_fd(&self) -> std::os::fd::BorrowedFd<'_> {
        self.stream.as_fd()
    }
}

#[cfg(windows)]
impl std::os::windows::io::AsSocket for Tunnel {
    fn as_socket(&self) -> std::os::windows::io::BorrowedSocket<'_> {
        self.stream.as_socket()
    }
}
