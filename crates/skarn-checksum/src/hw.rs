//! SSE4.2 hardware path.
//!
//! Folds the buffer through the dedicated `crc32` instruction: 4-byte words
//! first, then the 0-3 tail bytes with the 1- and 2-byte instruction
//! variants. Produces bit-identical results to the software path for every
//! input.
//!
//! Only compiled on `x86_64`; [`supported`] is the single capability query
//! gating dispatch into [`update`].

use std::arch::x86_64::{_mm_crc32_u16, _mm_crc32_u32, _mm_crc32_u8};

/// Returns true when the running CPU exposes the SSE4.2 `crc32` instruction.
///
/// One feature query, safe to call redundantly from any thread. Feature
/// absence is a normal outcome, not a failure.
pub(crate) fn supported() -> bool {
    std::is_x86_feature_detected!("sse4.2")
}

/// Extends `crc` over `data` using the `crc32` instruction.
///
/// Callable only where SSE4.2 support has been established via
/// [`supported`]; dispatch in `crc32c::update` guarantees this.
#[target_feature(enable = "sse4.2")]
pub(crate) fn update(mut crc: u32, data: &[u8]) -> u32 {
    let mut words = data.chunks_exact(4);
    for word in words.by_ref() {
        let word = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        crc = _mm_crc32_u32(crc, word);
    }

    // Tail in descending-size order: 3 => 1+2, 2 => 2, 1 => 1.
    let tail = words.remainder();
    match *tail {
        [a, b, c] => {
            crc = _mm_crc32_u8(crc, a);
            crc = _mm_crc32_u16(crc, u16::from_le_bytes([b, c]));
        }
        [a, b] => crc = _mm_crc32_u16(crc, u16::from_le_bytes([a, b])),
        [a] => crc = _mm_crc32_u8(crc, a),
        _ => {}
    }

    crc
}
