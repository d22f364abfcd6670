//! I/O backend trait.
//!
//! The [`IoBackend`] trait abstracts file I/O so the checksum driver can run
//! against standard `std::fs` files in production and against scripted
//! backends in tests (exact read counts, injected failures) without
//! changing the driver.

use std::path::Path;

use bytes::Bytes;

use crate::IoError;

/// Flags for opening files.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenFlags {
    /// Open for reading.
    pub read: bool,
    /// Open for writing.
    pub write: bool,
    /// Create the file if it doesn't exist.
    pub create: bool,
    /// Open in append mode.
    pub append: bool,
}

impl OpenFlags {
    /// Flags for reading an existing file.
    pub fn read_only() -> Self {
        Self {
            read: true,
            ..Self::default()
        }
    }

    /// Flags for creating or appending to a file.
    pub fn append_create() -> Self {
        Self {
            read: true,
            write: true,
            create: true,
            append: true,
        }
    }
}

/// Opaque handle to an open file.
///
/// The handle is backend-specific. For [`SyncBackend`](crate::SyncBackend)
/// it wraps a `std::fs::File`. The handle must be closed via
/// [`IoBackend::close`].
#[derive(Debug)]
pub struct FileHandle {
    /// Internal file descriptor or identifier.
    pub(crate) id: u64,
    /// The open file (for the sync backend).
    pub(crate) file: Option<std::fs::File>,
}

impl FileHandle {
    /// Creates a new file handle wrapping a `std::fs::File`.
    pub(crate) fn from_file(id: u64, file: std::fs::File) -> Self {
        Self {
            id,
            file: Some(file),
        }
    }

    /// Returns the internal file reference.
    pub(crate) fn file(&self) -> Result<&std::fs::File, IoError> {
        self.file
            .as_ref()
            .ok_or(IoError::InvalidHandle { handle: self.id })
    }

    /// Returns the internal file reference mutably.
    pub(crate) fn file_mut(&mut self) -> Result<&mut std::fs::File, IoError> {
        self.file
            .as_mut()
            .ok_or(IoError::InvalidHandle { handle: self.id })
    }
}

/// Abstraction over file I/O operations.
///
/// All methods are synchronous and blocking; callers needing non-blocking
/// behavior run them on a dedicated thread.
pub trait IoBackend: Send + Sync {
    /// Opens a file with the given flags.
    fn open(&self, path: &Path, flags: OpenFlags) -> Result<FileHandle, IoError>;

    /// Reads data from the file's current position.
    ///
    /// Returns the number of bytes read; 0 means end of file. A short read
    /// is not an error.
    fn read(&self, handle: &mut FileHandle, buf: &mut [u8]) -> Result<usize, IoError>;

    /// Reads data from a file at the given byte offset.
    ///
    /// Returns the number of bytes read. Does not move the file cursor.
    fn read_at(&self, handle: &FileHandle, offset: u64, buf: &mut [u8]) -> Result<usize, IoError>;

    /// Writes data to a file (at the current position or end in append mode).
    ///
    /// Returns the number of bytes written.
    fn write(&self, handle: &mut FileHandle, buf: &[u8]) -> Result<usize, IoError>;

    /// Syncs file data and metadata to disk.
    fn fsync(&self, handle: &FileHandle) -> Result<(), IoError>;

    /// Closes a file handle.
    fn close(&self, handle: FileHandle) -> Result<(), IoError>;

    /// Reads an entire file into memory.
    ///
    /// Convenience method for small files.
    fn read_all(&self, path: &Path) -> Result<Bytes, IoError>;

    /// Writes data to a file in one call.
    ///
    /// Convenience method for small files and test fixtures.
    fn write_all(&self, path: &Path, data: &[u8]) -> Result<(), IoError>;

    /// Returns the file size in bytes.
    fn file_size(&self, handle: &FileHandle) -> Result<u64, IoError>;
}
