//! Boundary memory capability and raw spans
//!
//! The engine never owns a linear memory. A dispatcher hands it a
//! `BoundaryMemory` capability for the duration of one call, and the only
//! thing the engine may do with the destination beyond reading and writing
//! is ask it for a region. What comes back out of a lowering is a `RawSpan`:
//! a plain offset/length/encoding triple with no reference to the memory it
//! describes. Pairing a span with the wrong memory is the dispatcher's bug
//! and surfaces, at worst, as an out-of-bounds error.

use crate::encoding::{SelectedEncoding, UTF16_TAG};
use crate::error::{Error, Result};

/// Capability over one side's boundary memory
///
/// Object safe so the engine can take `&mut dyn BoundaryMemory` without
/// caring what backs it: a wasm instance's linear memory, a test vector, a
/// recording wrapper.
pub trait BoundaryMemory {
    /// Read `len` bytes starting at `offset`
    fn read(&self, offset: u32, len: u32) -> Result<&[u8]>;

    /// Write `data` starting at `offset`
    fn write(&mut self, offset: u32, data: &[u8]) -> Result<()>;

    /// Allocate `len` bytes aligned to `align` and return the region offset
    ///
    /// The engine calls this exactly once per lowering, before its single
    /// write, and also for zero-length regions.
    fn allocate(&mut self, len: u32, align: u32) -> Result<u32>;

    /// Current memory size in bytes
    fn size(&self) -> u32;
}

/// Non-owning description of an encoded string region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpan {
    /// Region start offset in the memory it was lowered into
    pub base: u32,
    /// Region length in bytes
    pub byte_len: u32,
    /// Wire form of the bytes in the region
    pub encoding: SelectedEncoding,
}

impl RawSpan {
    /// Region length in code units of its wire form
    pub fn code_units(&self) -> u32 {
        self.byte_len / self.encoding.unit_width()
    }

    /// The code-unit word a compact destination passes at the boundary
    ///
    /// Latin-1 regions pass their unit count unchanged; UTF-16 regions set
    /// the high tag bit. Lowering caps regions at `MAX_STRING_BYTE_LENGTH`,
    /// which keeps every unit count below the tag bit, so the word loses
    /// nothing.
    pub fn tagged_code_units(&self) -> u32 {
        match self.encoding {
            SelectedEncoding::Utf16 => self.code_units() | UTF16_TAG,
            SelectedEncoding::Latin1 | SelectedEncoding::Utf8 => self.code_units(),
        }
    }

    /// Resolve a compact destination's tagged code-unit word back to a span
    pub fn from_compact(base: u32, tagged: u32) -> RawSpan {
        if tagged & UTF16_TAG != 0 {
            let units = tagged & !UTF16_TAG;
            RawSpan {
                base,
                // units stay below the tag bit, so 2x always fits u32
                byte_len: units * 2,
                encoding: SelectedEncoding::Utf16,
            }
        } else {
            RawSpan {
                base,
                byte_len: tagged,
                encoding: SelectedEncoding::Latin1,
            }
        }
    }
}

/// Vec-backed boundary memory with a bump allocator
///
/// Test and bench fixture standing in for a component instance's linear
/// memory. The backing vector grows on demand up to `limit`; allocation past
/// the limit is refused, which is how a fixed-size instance memory behaves
/// when it cannot grow.
#[derive(Debug)]
pub struct VecMemory {
    data: Vec<u8>,
    next_alloc: u32,
    limit: u32,
}

impl VecMemory {
    /// Memory free to grow through the whole 32-bit space
    pub fn new() -> Self {
        Self::with_limit(u32::MAX)
    }

    /// Memory that refuses to grow past `limit` bytes
    pub fn with_limit(limit: u32) -> Self {
        Self {
            data: Vec::new(),
            next_alloc: 0,
            limit,
        }
    }
}

impl Default for VecMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryMemory for VecMemory {
    fn read(&self, offset: u32, len: u32) -> Result<&[u8]> {
        let end = offset.checked_add(len).ok_or(Error::MemoryOutOfBounds {
            offset,
            len: len as u64,
            size: self.size(),
        })?;
        if end as usize > self.data.len() {
            return Err(Error::MemoryOutOfBounds {
                offset,
                len: len as u64,
                size: self.size(),
            });
        }
        Ok(&self.data[offset as usize..end as usize])
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        let oob = |size| Error::MemoryOutOfBounds {
            offset,
            len: data.len() as u64,
            size,
        };
        let len = u32::try_from(data.len()).map_err(|_| oob(self.size()))?;
        let end = offset.checked_add(len).ok_or_else(|| oob(self.size()))?;
        if end as usize > self.data.len() {
            return Err(oob(self.size()));
        }
        self.data[offset as usize..end as usize].copy_from_slice(data);
        Ok(())
    }

    fn allocate(&mut self, len: u32, align: u32) -> Result<u32> {
        debug_assert!(align.is_power_of_two());
        let exhausted = || Error::ResourceExhausted {
            requested: len as u64,
        };
        // Align up, then bump
        let base = self
            .next_alloc
            .checked_add(align - 1)
            .map(|n| n & !(align - 1))
            .ok_or_else(exhausted)?;
        let end = base.checked_add(len).ok_or_else(exhausted)?;
        if end > self.limit {
            return Err(exhausted());
        }
        if end as usize > self.data.len() {
            self.data.resize(end as usize, 0);
        }
        self.next_alloc = end;
        Ok(base)
    }

    fn size(&self) -> u32 {
        self.data.len() as u32
    }
}
