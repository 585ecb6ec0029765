#![no_main]

use libfuzzer_sys::fuzz_target;
use pot_xgettext::{normalize, RawMatch};
use pot_xgettext_fuzz::Match;

fuzz_target!(|matches: Vec<Match>| {
    let count = matches.len();
    let entries = normalize(matches.into_iter().map(RawMatch::from));
    assert!(entries.len() <= count);

    // Normalizing again must not merge anything else.
    let again = normalize(entries.iter().map(|entry| {
        let mut raw = RawMatch::new(entry.single.clone());
        raw.plural = entry.plural.clone();
        raw.context = entry.context.clone();
        raw
    }));
    assert_eq!(again.len(), entries.len());
});
