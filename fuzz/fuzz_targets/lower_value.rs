#![no_main]
use libfuzzer_sys::fuzz_target;

use strlift_core::{StringEncoding, VecMemory, lift, lower};

fuzz_target!(|data: &[u8]| {
    // First byte picks the destination, the rest becomes the string
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let destination = match selector % 3 {
        0 => StringEncoding::Utf8,
        1 => StringEncoding::Utf16,
        _ => StringEncoding::CompactUtf16,
    };
    let value = String::from_utf8_lossy(payload);

    // Lowering a valid string must never panic and must lift back unchanged
    let mut memory = VecMemory::new();
    let span = lower(&mut memory, destination, &value).unwrap();
    assert_eq!(lift(&memory, span).unwrap(), value);
});
