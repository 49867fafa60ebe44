#![no_main]

use libfuzzer_sys::fuzz_target;
use lng2po::escape::{escape, unescape};
use pretty_assertions::assert_eq;

fuzz_target!(|text: String| {
    let escaped = escape(&text);
    assert!(escaped.chars().all(|c| (' '..='~').contains(&c)));
    assert_eq!(unescape(&escaped), text);
});
