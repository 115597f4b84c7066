#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = jsontext::parse(text) else {
        return;
    };

    // Serialized output must reparse, and a second pass must reproduce it
    // byte for byte (integral floats fold to integer literals on the
    // first pass, so structural equality is only guaranteed from there).
    let compact = jsontext::to_string(&value);
    let reparsed = jsontext::parse(&compact).expect("serialized output must parse");
    assert_eq!(jsontext::to_string(&reparsed), compact);

    let pretty = jsontext::to_string_pretty(&value);
    assert_eq!(
        jsontext::parse(&pretty).expect("pretty output must parse"),
        reparsed
    );
});
