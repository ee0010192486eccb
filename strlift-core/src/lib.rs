//! # Strlift Core
//!
//! String lifting and lowering for component boundaries with per-side
//! encodings.
//!
//! Components keep their strings in their own linear memories, each in the
//! encoding that side declared: UTF-8, UTF-16, or the compact form that
//! stores Latin-1 when it can and UTF-16 when it must. Passing a string
//! across a boundary therefore means measuring it, allocating in the
//! destination, re-encoding, and validating on the way back out. This crate
//! is that layer and nothing else: no interface compilation, no module
//! loading, no persistence.
//!
//! ## Pipeline
//!
//! ```text
//! &str  → Probe → Allocate → Encode + Write → RawSpan      (lowering)
//! RawSpan → Read → Validate + Decode        → String       (lifting)
//! ```
//!
//! 1. **Probe**: pick the wire form and the exact byte length, before any
//!    destination memory is touched
//! 2. **Allocate**: one call on the destination's allocator capability, for
//!    exactly the probed length
//! 3. **Encode + Write**: fill the region in a single write
//! 4. **Validate + Decode**: on the way out, strict validation; malformed
//!    regions abort the call instead of producing replacement characters
//!
//! ## Example
//!
//! ```
//! use strlift_core::{StringEncoding, VecMemory, lift, lower};
//!
//! # fn main() -> strlift_core::Result<()> {
//! let mut memory = VecMemory::new();
//!
//! // "latin utf16" fits Latin-1, so a compact destination stores 11 bytes
//! let span = lower(&mut memory, StringEncoding::CompactUtf16, "latin utf16")?;
//! assert_eq!(span.byte_len, 11);
//!
//! let back = lift(&memory, span)?;
//! assert_eq!(back, "latin utf16");
//! # Ok(())
//! # }
//! ```

mod error;
pub mod encoding;
pub mod probe;
pub mod transcode;
pub mod memory;
pub mod engine;

pub use error::{Error, Result};
pub use encoding::{MAX_STRING_BYTE_LENGTH, SelectedEncoding, StringEncoding, UTF16_TAG};
pub use probe::{ProbeReport, probe};
pub use memory::{BoundaryMemory, RawSpan, VecMemory};
pub use engine::{lift, lower};
