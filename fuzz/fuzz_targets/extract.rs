#![no_main]

use libfuzzer_sys::fuzz_target;
use pot_xgettext::extract::extract_matches;

fuzz_target!(|source: &str| {
    let keywords = [String::from("translate"), String::from("__")];
    let Ok(matches) = extract_matches(source, &keywords) else {
        return;
    };
    for (line, _) in matches {
        assert!(line >= 1);
    }
});
