//! Lifting and lowering across a boundary
//!
//! `lower` moves an owned string into a destination memory in the encoding
//! that side declared; `lift` brings a region of a source memory back out as
//! an owned string. A call either delivers or aborts: on any error the
//! destination holds no partial string, because the engine performs its one
//! write only after the whole region has been encoded, and decoding never
//! returns a prefix.

use crate::encoding::{MAX_STRING_BYTE_LENGTH, StringEncoding};
use crate::error::{Error, Result};
use crate::memory::{BoundaryMemory, RawSpan};
use crate::probe::probe;
use crate::transcode;

/// Fit a probed byte length into a span, refusing anything past
/// `MAX_STRING_BYTE_LENGTH`
fn fit(byte_len: u64) -> Result<u32> {
    if byte_len > u64::from(MAX_STRING_BYTE_LENGTH) {
        return Err(Error::ResourceExhausted {
            requested: byte_len,
        });
    }
    Ok(byte_len as u32)
}

/// Lower `value` into `memory` for a destination declaring `destination`.
///
/// Probes first and allocates exactly the probed byte length, zero-length
/// strings included. The returned span describes the written region in the
/// destination's own terms.
pub fn lower(
    memory: &mut dyn BoundaryMemory,
    destination: StringEncoding,
    value: &str,
) -> Result<RawSpan> {
    let report = probe(value, destination);
    log::trace!(
        "probe for {:?} destination: selected {:?}, {} bytes, {} code units",
        destination,
        report.selected,
        report.byte_len,
        report.code_units
    );

    let byte_len = fit(report.byte_len)?;
    let base = memory.allocate(byte_len, report.selected.alignment())?;

    let encoded = transcode::encode(value, report.selected)?;
    if encoded.len() as u64 != report.byte_len {
        return Err(Error::InternalEncodingDefect(format!(
            "probe measured {} bytes but the encoder produced {}",
            report.byte_len,
            encoded.len()
        )));
    }
    memory.write(base, &encoded)?;

    log::debug!(
        "lowered {} bytes as {:?} at offset {}",
        byte_len,
        report.selected,
        base
    );
    Ok(RawSpan {
        base,
        byte_len,
        encoding: report.selected,
    })
}

/// Lift the string described by `span` out of `memory`.
///
/// The read is bounds-checked and the bytes are validated strictly; a region
/// that is not a valid sequence in its wire form aborts the call.
pub fn lift(memory: &dyn BoundaryMemory, span: RawSpan) -> Result<String> {
    let bytes = memory.read(span.base, span.byte_len)?;
    let value = transcode::decode(bytes, span.encoding)?;
    log::debug!(
        "lifted {} bytes as {:?} from offset {}",
        span.byte_len,
        span.encoding,
        span.base
    );
    Ok(value)
}
