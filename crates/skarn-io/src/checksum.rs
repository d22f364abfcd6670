//! File checksum driver.
//!
//! Reads a file in bounded chunks and folds each chunk into a running
//! CRC-32C through the `skarn-checksum` engine. The driver owns no buffer:
//! the caller supplies one of fixed capacity that is reused across reads.
//!
//! This is the only place in the checksum stack where I/O failures can
//! occur. A failed read is logged with the underlying OS error and surfaced
//! as [`IoError`]; the returned checksum of a failed call must not be used.

use std::path::Path;

use skarn_checksum::{Engine, INITIAL_CRC, update};

use crate::IoError;
use crate::backend::{FileHandle, IoBackend, OpenFlags};

/// Chunk capacity used by [`path_checksum`] (64 KiB).
pub const READ_BUFFER_CAPACITY: usize = 64 * 1024;

/// Computes the running CRC-32C of a file's contents from the handle's
/// current position.
///
/// The first read fills `buf[start_offset..]`, and the fold covers
/// `buf[..start_offset + n]` — any bytes the caller pre-placed below
/// `start_offset` participate in the checksum. If that read exactly fills
/// the buffer, reads of the full capacity repeat, folding each chunk, until
/// a read returns fewer bytes than the capacity. End of file is the normal
/// terminating condition, not an error.
///
/// A zero-length file (with `start_offset == 0`) yields [`INITIAL_CRC`]
/// unchanged. Like [`update`], the result is the raw running value without
/// the final inversion.
pub fn file_checksum(
    backend: &dyn IoBackend,
    handle: &mut FileHandle,
    buf: &mut [u8],
    start_offset: usize,
    engine: Engine,
) -> Result<u32, IoError> {
    let capacity = buf.len();
    let mut crc = INITIAL_CRC;

    let n = read_logged(backend, handle, &mut buf[start_offset..])?;
    let filled = start_offset + n;
    crc = update(crc, &buf[..filled], engine);

    // A partially filled buffer means the file ended within the first read.
    // A zero-capacity buffer cannot make progress.
    if filled == capacity && capacity > 0 {
        loop {
            let n = read_logged(backend, handle, buf)?;
            if n > 0 {
                crc = update(crc, &buf[..n], engine);
            }
            if n < capacity {
                break;
            }
        }
    }

    Ok(crc)
}

/// Opens `path` read-only and checksums its entire contents.
///
/// Drives [`file_checksum`] with an internally allocated buffer of
/// [`READ_BUFFER_CAPACITY`] bytes and closes the handle before returning.
pub fn path_checksum(
    backend: &dyn IoBackend,
    path: &Path,
    engine: Engine,
) -> Result<u32, IoError> {
    let mut handle = backend.open(path, OpenFlags::read_only())?;
    let mut buf = vec![0u8; READ_BUFFER_CAPACITY];

    let result = file_checksum(backend, &mut handle, &mut buf, 0, engine);
    backend.close(handle)?;
    result
}

/// Issues one read, logging any failure before propagating it.
fn read_logged(
    backend: &dyn IoBackend,
    handle: &mut FileHandle,
    buf: &mut [u8],
) -> Result<usize, IoError> {
    match backend.read(handle, buf) {
        Ok(n) => Ok(n),
        Err(e) => {
            tracing::error!(error = %e, "read failed while checksumming file");
            Err(e)
        }
    }
}
