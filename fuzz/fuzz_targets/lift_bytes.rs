#![no_main]
use libfuzzer_sys::fuzz_target;

use strlift_core::{
    BoundaryMemory, RawSpan, SelectedEncoding, StringEncoding, VecMemory, lift, lower,
};

fuzz_target!(|data: &[u8]| {
    // First byte picks the wire form, the rest is the region
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let encoding = match selector % 3 {
        0 => SelectedEncoding::Latin1,
        1 => SelectedEncoding::Utf8,
        _ => SelectedEncoding::Utf16,
    };

    let mut memory = VecMemory::new();
    let len = payload.len() as u32;
    let base = memory.allocate(len, encoding.alignment()).unwrap();
    memory.write(base, payload).unwrap();
    let span = RawSpan {
        base,
        byte_len: len,
        encoding,
    };

    // Lifting arbitrary bytes must never panic; whatever it accepts must
    // survive a fresh lower/lift round trip.
    if let Ok(value) = lift(&memory, span) {
        let destination = match encoding {
            SelectedEncoding::Utf8 => StringEncoding::Utf8,
            SelectedEncoding::Utf16 => StringEncoding::Utf16,
            SelectedEncoding::Latin1 => StringEncoding::CompactUtf16,
        };
        let mut relay = VecMemory::new();
        let relaid = lower(&mut relay, destination, &value).unwrap();
        assert_eq!(lift(&relay, relaid).unwrap(), value);
    }
});
