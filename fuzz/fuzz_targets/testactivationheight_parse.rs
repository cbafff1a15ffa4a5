#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((dep, height)) = dwarf_node::parse_test_activation_height(s) else {
        return;
    };
    assert!((0..i32::MAX).contains(&height));
    let rendered = format!("{}@{}", dep.name(), height);
    assert_eq!(
        dwarf_node::parse_test_activation_height(&rendered),
        Ok((dep, height))
    );
});
