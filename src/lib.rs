// Copyright 2025 The crc32check Developers. Licensed under MIT or Apache-2.0.

//! `crc32check`
//! ===========
//!
//! Streaming CRC-32 (IEEE 802.3 / zlib polynomial) computation with both the
//! raw and the PNG/zlib finalization conventions, plus the filename hex-token
//! scanner used by the `crc32check` binary to verify files that carry their
//! own checksum in their name (e.g. `data_CBF43926.bin`).
//!
//! ## Usage
//!
//! ```
//! use crc32check::Digest;
//!
//! let mut c = Digest::new();
//! c.write(b"1234");
//! c.write(b"56789");
//! let checksum = c.sum32();
//! assert_eq!(checksum, 0xCBF43926);
//! ```

mod table;

/// Represents an in-progress CRC-32 computation.
///
/// The accumulator carries the zlib-chained value: after any sequence of
/// [`write`](Digest::write) calls it equals `zlib.crc32` of the concatenated
/// input seeded with the convention's initial value. Splitting the input into
/// blocks of any size yields the same result as one write over the whole.
#[derive(Clone)]
pub struct Digest {
    state: u32,
    finalize_xor: u32,
}

impl Digest {
    /// Creates a new `Digest` using the raw convention: accumulator seeded
    /// with `0`, no final XOR. The result over a whole input equals the
    /// standard CRC-32/ISO-HDLC check value.
    pub fn new() -> Self {
        Self {
            state: 0,
            finalize_xor: 0,
        }
    }

    /// Creates a new `Digest` using the PNG/zlib convention: accumulator
    /// seeded with `0xFFFF_FFFF` and bit-inverted once at the end.
    pub fn new_png() -> Self {
        Self {
            state: !0,
            finalize_xor: !0,
        }
    }

    /// Writes some data into the digest.
    pub fn write(&mut self, bytes: &[u8]) {
        self.state = table::update(self.state, bytes);
    }

    /// Computes the current CRC-32 value under the digest's convention.
    pub fn sum32(&self) -> u32 {
        self.state ^ self.finalize_xor
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the leftmost 8-character hex token embedded in `name`.
///
/// A token is a run of exactly eight hex digits, either all-lowercase
/// (`a-f0-9`) or all-uppercase (`A-F0-9`), never mixed-case, bounded on both
/// sides by a non-alphanumeric byte or the string edge. Only `a-z`, `A-Z`
/// and `0-9` block adjacency; `_` and every other byte count as boundaries.
///
/// ```
/// use crc32check::find_hex_token;
///
/// assert_eq!(find_hex_token("data_cbf43926.bin"), Some("cbf43926"));
/// assert_eq!(find_hex_token("-"), None);
/// ```
pub fn find_hex_token(name: &str) -> Option<&str> {
    let bytes = name.as_bytes();
    if bytes.len() < 8 {
        return None;
    }
    for start in 0..=bytes.len() - 8 {
        let end = start + 8;
        if start > 0 && bytes[start - 1].is_ascii_alphanumeric() {
            continue;
        }
        if end < bytes.len() && bytes[end].is_ascii_alphanumeric() {
            continue;
        }
        let run = &bytes[start..end];
        let lower = run.iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        let upper = run.iter().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'));
        if lower || upper {
            // The run is pure ASCII and both neighbors are non-alphanumeric,
            // so start and end fall on char boundaries.
            return Some(&name[start..end]);
        }
    }
    None
}
