//! Property tests for the escaping helpers.

use proptest::prelude::*;
use quire_babel::common::escape::{escape, index_of_unescaped, is_escaped, unescape};

proptest! {
    #[test]
    fn unescape_reverses_escape(text in "[a-z*_\\\\# ]{0,24}") {
        prop_assert_eq!(unescape(&escape(&text)), text);
    }

    #[test]
    fn escaped_markers_are_never_found(text in "[a-z*_\\\\]{0,24}") {
        let escaped = escape(&text);
        prop_assert_eq!(index_of_unescaped(&escaped, "*", 0), None);
        prop_assert_eq!(index_of_unescaped(&escaped, "_", 0), None);
    }

    #[test]
    fn escape_state_follows_run_parity(run in 0usize..8) {
        let text = format!("{}*", "\\".repeat(run));
        prop_assert_eq!(is_escaped(&text, run), run % 2 == 1);
    }
}

#[test]
fn unescape_keeps_lone_trailing_escape() {
    assert_eq!(unescape("end\\"), "end\\");
    assert_eq!(unescape("\\\\\\*"), "\\*");
}
