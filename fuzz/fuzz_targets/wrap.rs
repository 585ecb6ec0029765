#![no_main]

use libfuzzer_sys::fuzz_target;
use pot_xgettext::pot::wrap_literal;
use pot_xgettext_fuzz::unwrap_literal;

fuzz_target!(|input: (String, u8)| {
    let (text, column) = input;
    if text.contains(['"', '\n']) {
        return;
    }
    let literal = format!("\"{text}\"");
    let wrapped = wrap_literal(&literal, usize::from(column));
    pretty_assertions::assert_eq!(unwrap_literal(&wrapped), text);
});
