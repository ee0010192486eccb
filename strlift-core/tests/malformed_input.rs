//! Malformed source rejection integration test
//!
//! Lifting validates strictly. A region that is not a valid sequence in its
//! wire form aborts the call with a positioned error, never a replacement
//! character and never a partial string. Each case plants raw bytes in a
//! source memory the way a misbehaving producer would and lifts them.

use strlift_core::{
    BoundaryMemory, Error, RawSpan, SelectedEncoding, StringEncoding, VecMemory, lift, lower,
};

/// Plant raw bytes in a fresh memory and describe them as a span.
fn plant(bytes: &[u8], encoding: SelectedEncoding) -> (VecMemory, RawSpan) {
    let mut memory = VecMemory::new();
    let len = bytes.len() as u32;
    let base = memory.allocate(len, encoding.alignment()).unwrap();
    memory.write(base, bytes).unwrap();
    (
        memory,
        RawSpan {
            base,
            byte_len: len,
            encoding,
        },
    )
}

// ---------------------------------------------------------------------------
// UTF-16 defects
// ---------------------------------------------------------------------------

#[test]
fn test_odd_byte_length_rejected_before_any_unit() {
    let (memory, span) = plant(b"\x41\x00\x42", SelectedEncoding::Utf16);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(err, Error::TruncatedUnit { byte_len: 3 });
}

#[test]
fn test_lone_high_surrogate_rejected() {
    let (memory, span) = plant(b"\x00\xd8", SelectedEncoding::Utf16);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(
        err,
        Error::UnpairedSurrogate {
            unit: 0xD800,
            index: 0
        }
    );
}

#[test]
fn test_lone_low_surrogate_rejected() {
    let (memory, span) = plant(b"\xff\xdf", SelectedEncoding::Utf16);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(
        err,
        Error::UnpairedSurrogate {
            unit: 0xDFFF,
            index: 0
        }
    );
}

#[test]
fn test_high_surrogate_at_region_end_rejected() {
    // "AB" then a dangling high surrogate in the last unit
    let (memory, span) = plant(b"\x41\x00\x42\x00\x00\xd8", SelectedEncoding::Utf16);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(
        err,
        Error::UnpairedSurrogate {
            unit: 0xD800,
            index: 2
        }
    );
}

#[test]
fn test_swapped_surrogate_pair_rejected() {
    // Low then high: both halves present, wrong order
    let (memory, span) = plant(b"\x04\xde\x40\xd8", SelectedEncoding::Utf16);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(
        err,
        Error::UnpairedSurrogate {
            unit: 0xDE04,
            index: 0
        }
    );
}

// ---------------------------------------------------------------------------
// UTF-8 defects
// ---------------------------------------------------------------------------

#[test]
fn test_invalid_lead_byte_rejected_with_offset() {
    let (memory, span) = plant(b"ok\xff", SelectedEncoding::Utf8);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(err, Error::InvalidByteSequence { offset: 2 });
}

#[test]
fn test_overlong_encoding_rejected() {
    let (memory, span) = plant(b"\xc0\x80", SelectedEncoding::Utf8);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(err, Error::InvalidByteSequence { offset: 0 });
}

#[test]
fn test_utf8_encoded_surrogate_rejected() {
    // Surrogates are not scalar values even when their bits fit the 3-byte form
    let (memory, span) = plant(b"\xed\xa0\x80", SelectedEncoding::Utf8);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(err, Error::InvalidByteSequence { offset: 0 });
}

#[test]
fn test_truncated_multibyte_tail_rejected() {
    let (memory, span) = plant(b"ab\xe2\x82", SelectedEncoding::Utf8);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(err, Error::InvalidByteSequence { offset: 2 });
}

#[test]
fn test_bare_continuation_byte_rejected() {
    let (memory, span) = plant(b"\x80", SelectedEncoding::Utf8);
    let err = lift(&memory, span).unwrap_err();
    assert_eq!(err, Error::InvalidByteSequence { offset: 0 });
}

// ---------------------------------------------------------------------------
// Latin-1 has no invalid bytes
// ---------------------------------------------------------------------------

#[test]
fn test_every_latin1_byte_value_lifts() {
    let bytes: Vec<u8> = (0..=255).collect();
    let (memory, span) = plant(&bytes, SelectedEncoding::Latin1);
    let lifted = lift(&memory, span).unwrap();
    assert_eq!(lifted.chars().count(), 256);
    assert!(lifted.chars().all(|ch| (ch as u32) <= 0xFF));
}

// ---------------------------------------------------------------------------
// Aborts are clean
// ---------------------------------------------------------------------------

#[test]
fn test_failed_lift_leaves_source_readable() {
    let (memory, span) = plant(b"\x00\xd8", SelectedEncoding::Utf16);
    assert!(lift(&memory, span).is_err());
    // The source region is untouched and the same call fails the same way
    assert_eq!(memory.read(span.base, span.byte_len).unwrap(), b"\x00\xd8");
    assert_eq!(
        lift(&memory, span).unwrap_err(),
        Error::UnpairedSurrogate {
            unit: 0xD800,
            index: 0
        }
    );
}

#[test]
fn test_lowering_never_produces_a_rejectable_region() {
    // Anything lowered by the engine must lift cleanly, including strings
    // that look like surrogate-pair edge cases once encoded.
    let tricky = "\u{FFFF}\u{10000}\u{10FFFF}a\u{00FF}";
    for destination in [
        StringEncoding::Utf8,
        StringEncoding::Utf16,
        StringEncoding::CompactUtf16,
    ] {
        let mut memory = VecMemory::new();
        let span = lower(&mut memory, destination, tricky).unwrap();
        assert_eq!(lift(&memory, span).unwrap(), tricky);
    }
}
