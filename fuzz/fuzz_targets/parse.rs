#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Must never panic or overflow the stack, only return errors.
        let _ = jsontext::parse(text);
    }
});
