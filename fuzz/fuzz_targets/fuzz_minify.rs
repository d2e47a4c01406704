#![no_main]

use jscrunch::minify;
use libfuzzer_sys::fuzz_target;

// The pass must be total over arbitrary text: never panic, never grow the
// input, and always agree with itself.
fuzz_target!(|data: &str| {
    let first = minify(data);
    assert_eq!(first, minify(data));
    assert!(first.text.chars().count() <= data.chars().count());
    assert_eq!(first.ended_cleanly, first.open_construct.is_none());

    // The output must itself be scannable without panicking.
    let _ = minify(&first.text);
});
