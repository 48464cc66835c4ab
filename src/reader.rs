//! Plaintext checks over `std::io::Read` streams
//!
//! Streams are read to the end (or to the preview cap) into memory and the
//! collected bytes are classified as a whole.
//!
//! Preview caps count bytes, not characters. When the cap falls inside a
//! multi-byte UTF-8 sequence the prefix ends with a truncated sequence and
//! is reported as binary, even if the full stream is valid text.

use std::io::{ErrorKind, Read};

use crate::config::PreviewLimit;
use crate::detect::{detect, is_plaintext, Detection};
use crate::error::Result;

/// Size of each `read` call
const CHUNK_SIZE: usize = 1024;

/// Initial capacity of the accumulation buffer
const INITIAL_CAPACITY: usize = 32 * 1024;

/// Read `reader` to the end and check whether its content is plaintext
pub fn from_reader<R: Read>(reader: R) -> Result<bool> {
    let buffer = read_to_end(reader)?;
    if buffer.is_empty() {
        return Ok(true);
    }
    Ok(is_plaintext(&buffer))
}

/// Check whether the first `max_kb` kilobytes of `reader` are plaintext
///
/// Bytes past the cap are never read. Fails with
/// [`PlaintextError::InvalidLength`](crate::PlaintextError::InvalidLength)
/// when `max_kb` is zero.
pub fn from_reader_preview<R: Read>(reader: R, max_kb: usize) -> Result<bool> {
    let limit = PreviewLimit::from_kb(max_kb)?;
    from_reader(bounded(reader, limit))
}

/// Read `reader` (bounded by `preview` if set) and classify it in detail
pub(crate) fn detect_reader<R: Read>(reader: R, preview: Option<PreviewLimit>) -> Result<Detection> {
    let buffer = match preview {
        Some(limit) => read_to_end(bounded(reader, limit))?,
        None => read_to_end(reader)?,
    };
    Ok(detect(&buffer))
}

fn bounded<R: Read>(reader: R, limit: PreviewLimit) -> std::io::Take<R> {
    log::trace!("preview capped at {} bytes ({} KB)", limit.bytes(), limit.kb());
    reader.take(limit.bytes())
}

/// Accumulate a stream in fixed-size chunks until end of data
fn read_to_end<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(INITIAL_CAPACITY);
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                log::debug!("read failed after {} bytes: {}", buffer.len(), e);
                return Err(e.into());
            }
        }
    }

    log::debug!("accumulated {} bytes", buffer.len());
    Ok(buffer)
}
