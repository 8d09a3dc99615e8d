//! Response head accumulation
//!
//! One routine serves every dial variant: bytes are accumulated across as
//! many reads as the proxy needs until the head ends with a blank line.

use std::io::{self, Read};

use crate::error::{self, ConnectionClosed, HeadTooLarge, Result};

pub const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Largest response head accepted from a proxy.
pub const MAX_HEAD_LEN: usize = 16 * 1024;

/// Read from `stream` until the accumulated bytes end with `\r\n\r\n`.
///
/// Each read asks for no more bytes than could still complete the
/// terminator, so anything the proxy sends after the head stays in the
/// socket for the tunnel's first read.
///
/// # Errors
///
/// `ResponseRead` on EOF before the terminator, on an I/O error, or when the
/// head grows past [`MAX_HEAD_LEN`]; `Timeout` when the stream's deadline
/// expires.
pub fn read_response_head<R: Read + ?Sized>(stream: &mut R) -> Result<Vec<u8>> {
    let mut head = Vec::with_capacity(256);
    let mut chunk = [0u8; HEAD_TERMINATOR.len()];

    loop {
        if head.ends_with(HEAD_TERMINATOR) {
            return Ok(head);
        }
        if head.len() >= MAX_HEAD_LEN {
            return Err(error::response_read(HeadTooLarge(MAX_HEAD_LEN)));
        }

        let want = HEAD_TERMINATOR.len() - partial_terminator(&head);
        match stream.read(&mut chunk[..want]) {
            Ok(0) => return Err(error::response_read(ConnectionClosed)),
            Ok(n) => head.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(error::from_read(e)),
        }
    }
}

/// Length of the longest suffix of `head` that is a proper prefix of the terminator.
fn partial_terminator(head: &[u8]) -> usize {
    (1..HEAD_TERMINATOR.len())
        .rev()
        .find(|&n| head.ends_with(&HEAD_TERMINATOR[..n]))
        .unwrap_or(0)
}

/// First line of a response head, without its terminator.
#[must_use]
pub fn status_line(head: &str) -> &str {
    head.split("\r\n").next().unwrap_or("")
}

/// Whether a status line carries the space-delimited code `200`.
#[must_use]
pub fn is_success(status_line: &str) -> bool {
    status_line.contains(" 200 ")
}
