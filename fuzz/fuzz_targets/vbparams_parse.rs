#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((pos, vb)) = dwarf_node::parse_vbparams(s) else {
        return;
    };
    assert!(vb.min_activation_height >= 0);
    let rendered = format!("{}:{}:{}", pos.name(), vb.start_time, vb.timeout);
    assert!(s.starts_with(pos.name()));
    assert!(dwarf_node::parse_vbparams(&rendered).is_ok());
});
