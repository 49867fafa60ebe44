#![no_main]

use libfuzzer_sys::fuzz_target;
use lng2po::lng::{parse, Role};
use lng2po_fuzz::{render, Line};

fuzz_target!(|lines: Vec<Line>| {
    let text = render(&lines);
    for role in [Role::Msgid, Role::Msgstr] {
        let labels = parse(&text, role);
        for value in labels.values() {
            // Every stored value is a role-prefixed first line plus
            // indented continuations, all quoted printable ASCII.
            let mut parts = value.lines();
            let first = parts.next().expect("values are never empty");
            assert!(first.starts_with(&format!("{:<7} \"", role.marker())));
            for part in parts {
                assert!(part.starts_with("        \""));
            }
            for part in value.lines() {
                assert!(part.ends_with('"'));
                assert!(part.chars().all(|c| (' '..='~').contains(&c)));
            }
        }
    }
});
