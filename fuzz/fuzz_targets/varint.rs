#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok((n, nbytes)) = dwarf_consensus::read_varint_bytes(data) else {
        return;
    };
    let mut enc = Vec::new();
    dwarf_consensus::encode_varint(n, &mut enc);
    assert_eq!(enc, &data[..nbytes]);
});
