#![no_main]

use jsonshade::Parser;
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 1; // 1 flag byte

/// Parse arbitrary (lossily decoded) text. A successful parse must format
/// to a rendering that reparses to the identical rendering, and every
/// object must satisfy the class invariant.
fn run(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let text = String::from_utf8_lossy(&data[HEADER..]);

    let mut parser = Parser::new();
    let parsed = if flags & 1 == 0 {
        parser.parse(&text)
    } else {
        parser.parse_multi(&text)
    };

    let Ok(doc) = parsed else {
        return;
    };

    let rendered = doc.to_json();
    let reparsed = if flags & 1 == 0 {
        parser.parse(&rendered)
    } else {
        parser.parse_multi(&rendered)
    };
    let again = reparsed.expect("canonical rendering must reparse").to_json();
    assert_eq!(rendered, again, "formatting must be idempotent");
}

fuzz_target!(|data: &[u8]| run(data));
