//! Synchronous I/O backend using `std::fs`.
//!
//! This is the default backend. All operations are blocking and go through
//! the OS page cache.

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;

use crate::IoError;
use crate::backend::{FileHandle, IoBackend, OpenFlags};

/// Synchronous I/O backend using `std::fs::File`.
#[derive(Debug)]
pub struct SyncBackend {
    /// Counter for generating unique file handle IDs.
    next_handle_id: AtomicU64,
}

impl SyncBackend {
    /// Creates a new synchronous I/O backend.
    pub fn new() -> Self {
        Self {
            next_handle_id: AtomicU64::new(1),
        }
    }

    /// Returns the next unique handle ID.
    fn next_id(&self) -> u64 {
        self.next_handle_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SyncBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl IoBackend for SyncBackend {
    fn open(&self, path: &Path, flags: OpenFlags) -> Result<FileHandle, IoError> {
        let mut opts = OpenOptions::new();

        if flags.read {
            opts.read(true);
        }
        if flags.write {
            opts.write(true);
        }
        if flags.create {
            opts.create(true);
        }
        if flags.append {
            opts.append(true);
        }

        let file = opts.open(path)?;
        let id = self.next_id();
        Ok(FileHandle::from_file(id, file))
    }

    fn read(&self, handle: &mut FileHandle, buf: &mut [u8]) -> Result<usize, IoError> {
        let file = handle.file_mut()?;
        let n = file.read(buf)?;
        Ok(n)
    }

    fn read_at(&self, handle: &FileHandle, offset: u64, buf: &mut [u8]) -> Result<usize, IoError> {
        // pread on Unix: positional read without moving the cursor
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileExt;
            let file = handle.file()?;
            let n = file.read_at(buf, offset)?;
            Ok(n)
        }

        #[cfg(not(unix))]
        {
            use std::os::windows::fs::FileExt;
            let file = handle.file()?;
            let n = file.seek_read(buf, offset)?;
            Ok(n)
        }
    }

    fn write(&self, handle: &mut FileHandle, buf: &[u8]) -> Result<usize, IoError> {
        let file = handle.file_mut()?;
        let n = file.write(buf)?;
        Ok(n)
    }

    fn fsync(&self, handle: &FileHandle) -> Result<(), IoError> {
        handle.file()?.sync_all()?;
        Ok(())
    }

    fn close(&self, mut handle: FileHandle) -> Result<(), IoError> {
        // Drop the file to close it
        handle.file = None;
        Ok(())
    }

    fn read_all(&self, path: &Path) -> Result<Bytes, IoError> {
        let data = fs::read(path)?;
        Ok(Bytes::from(data))
    }

    fn write_all(&self, path: &Path, data: &[u8]) -> Result<(), IoError> {
        fs::write(path, data)?;
        Ok(())
    }

    fn file_size(&self, handle: &FileHandle) -> Result<u64, IoError> {
        let metadata = handle.file()?.metadata()?;
        Ok(metadata.len())
    }
}
