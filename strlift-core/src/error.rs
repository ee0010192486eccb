//! Error types for strlift-core

use thiserror::Error;

/// Result type alias using strlift Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while lifting or lowering a string
///
/// Every variant is terminal for the call that produced it: the engine never
/// retries and never substitutes replacement characters. A malformed source
/// region is a contract violation by the producing side, reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Source bytes are not a valid sequence in the region's encoding
    #[error("invalid byte sequence at offset {offset}")]
    InvalidByteSequence {
        offset: usize,
    },

    /// A UTF-16 surrogate code unit without its required pair
    #[error("unpaired surrogate 0x{unit:04x} at code unit {index}")]
    UnpairedSurrogate {
        unit: u16,
        index: usize,
    },

    /// Region byte length is not a whole number of code units
    #[error("truncated code unit: {byte_len} bytes does not hold whole 16-bit units")]
    TruncatedUnit {
        byte_len: usize,
    },

    /// The destination could not provide the requested allocation
    #[error("allocation of {requested} bytes refused by destination memory")]
    ResourceExhausted {
        requested: u64,
    },

    /// Access outside the bounds of a boundary memory
    #[error("memory access out of bounds: {len} bytes at offset {offset} (memory size {size})")]
    MemoryOutOfBounds {
        offset: u32,
        len: u64,
        size: u32,
    },

    /// Internal defect: the probe and the encoder disagreed
    #[error("internal encoding defect: {0}")]
    InternalEncodingDefect(String),
}
