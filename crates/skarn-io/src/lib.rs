//! # skarn-io: File I/O and File Checksumming for Skarn
//!
//! This crate provides a trait-based abstraction over file I/O operations
//! and the driver that folds file contents through the `skarn-checksum`
//! engine in bounded chunks:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        file_checksum         │
//! │  (bounded reads → CRC fold)  │
//! └──────────────┬───────────────┘
//!                │
//! ┌──────────────┴───────────────┐
//! │           skarn-io           │
//! │  ┌──────────┐  ┌──────────┐  │
//! │  │   Sync   │  │ scripted │  │
//! │  │ Backend  │  │ (tests)  │  │
//! │  └──────────┘  └──────────┘  │
//! └──────────────────────────────┘
//! ```
//!
//! The [`IoBackend`] trait exists so the driver can be exercised against
//! scripted backends in tests — exact read counts and injected failures —
//! as well as against real files via [`SyncBackend`].
//!
//! Read failures are logged through `tracing` and returned as [`IoError`];
//! end of file is never an error.

mod backend;
mod checksum;
mod error;
mod sync_backend;

pub use backend::{FileHandle, IoBackend, OpenFlags};
pub use checksum::{READ_BUFFER_CAPACITY, file_checksum, path_checksum};
pub use error::IoError;
pub use sync_backend::SyncBackend;
