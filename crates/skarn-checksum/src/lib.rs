//! # skarn-checksum: CRC-32C Engine for Skarn
//!
//! Bit-exact CRC-32C (Castagnoli polynomial) used to verify the integrity
//! of in-memory buffers, strings, and — via `skarn-io` — file contents.
//! Results are identical to the canonical CRC-32C definition deployed by
//! iSCSI, SCTP, and common archive formats.
//!
//! Two compute paths sit behind one incremental API:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 update(crc, data, engine)   │
//! │  ┌────────────────────┐  ┌───────────────┐  │
//! │  │ slicing-by-8       │  │ SSE4.2 crc32  │  │
//! │  │ (8 lane tables)    │  │ (x86_64 only) │  │
//! │  └────────────────────┘  └───────────────┘  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The paths agree exactly for every input length and alignment; which one
//! runs is an [`Engine`] chosen once via [`Engine::detect`] and passed
//! explicitly — no hidden global state anywhere.
//!
//! # Usage
//!
//! ```
//! use skarn_checksum::{Crc32c, crc32c};
//!
//! // One-shot, standard finalized value
//! let checksum = crc32c(b"hello world");
//!
//! // Incremental over chunks
//! let mut hasher = Crc32c::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! let checksum = hasher.finalize();
//! ```
//!
//! The incremental fold ([`update`], [`str_checksum`], [`Crc32c::running`])
//! threads the raw running value and never inverts it; [`crc32c`] and
//! [`Crc32c::finalize`] apply the conventional final XOR to produce the
//! standard published value.

mod crc32c;
mod tables;

#[cfg(target_arch = "x86_64")]
mod hw;

pub use crc32c::{Crc32c, Engine, INITIAL_CRC, crc32c, str_checksum, update, verify_crc32c};
