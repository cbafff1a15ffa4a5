#![no_main]

use dwarf_consensus::TaggedScript;
use libfuzzer_sys::fuzz_target;

// Anything that decodes must re-encode to the exact input bytes.
fuzz_target!(|data: &[u8]| {
    let Ok(script) = TaggedScript::decode(data) else {
        return;
    };
    assert_eq!(script.encode(), data);
});
