#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok((n, nbytes)) = dwarf_consensus::read_compact_size_bytes(data) else {
        return;
    };
    let mut enc = Vec::new();
    dwarf_consensus::encode_compact_size(n, &mut enc);
    assert_eq!(enc, &data[..nbytes], "accepted a non-minimal length prefix");
});
