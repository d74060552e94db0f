//! Character-level escaping shared by the codecs.
//!
//! A backslash immediately before a reserved character removes its special
//! meaning. Runs of backslashes cancel out in pairs, so whether a character is
//! escaped depends on the parity of the run right before it.
//!
//! All indices are byte offsets. The escape character and every marker are
//! ASCII, so a byte scan never lands inside a multi-byte character.

/// The escape character.
pub const ESCAPE: char = '\\';

const ESCAPE_BYTE: u8 = b'\\';

/// Characters with inline meaning in the markdown format.
pub const INLINE_RESERVED: &[char] = &['*', '_'];

/// Returns true if the character at byte `index` is escaped.
///
/// That is the case when the run of escape characters immediately before
/// `index` has odd length.
pub fn is_escaped(text: &str, index: usize) -> bool {
    let bytes = text.as_bytes();
    let index = index.min(bytes.len());
    let run = bytes[..index]
        .iter()
        .rev()
        .take_while(|&&b| b == ESCAPE_BYTE)
        .count();
    run % 2 == 1
}

/// Escape the inline markers and the escape character itself.
pub fn escape(text: &str) -> String {
    escape_with(text, INLINE_RESERVED)
}

/// Insert an escape before every character of `reserved` and every escape
/// character, in one left-to-right pass.
pub fn escape_with(text: &str, reserved: &[char]) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        if ch == ESCAPE || reserved.contains(&ch) {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out
}

/// Remove one escape character before every escaped character.
///
/// The scan runs from the end of the string backwards. Each time an escaped
/// character is found its escape is dropped and the scan resumes left of the
/// dropped escape, so an escaped escape character is never consumed twice.
pub fn unescape(text: &str) -> String {
    if !text.contains(ESCAPE) {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();

    // runs[i]: length of the escape run ending right before chars[i].
    let mut runs = Vec::with_capacity(chars.len());
    let mut run = 0;
    for &ch in &chars {
        runs.push(run);
        run = if ch == ESCAPE { run + 1 } else { 0 };
    }

    let mut keep = vec![true; chars.len()];
    let mut index = chars.len();
    while index > 0 {
        index -= 1;
        if runs[index] % 2 == 1 {
            keep[index - 1] = false;
            index -= 1;
        }
    }

    chars
        .into_iter()
        .zip(keep)
        .filter_map(|(ch, kept)| kept.then_some(ch))
        .collect()
}

/// First occurrence of `needle` at or after byte `from` that is not escaped.
pub fn index_of_unescaped(text: &str, needle: &str, from: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let mut cursor = from;
    while cursor <= text.len() {
        let found = cursor + text.get(cursor..)?.find(needle)?;
        if !is_escaped(text, found) {
            return Some(found);
        }
        // An escaped hit may overlap the real one (`\___` has `__` at 2).
        cursor = found + 1;
    }
    None
}

/// The earliest unescaped occurrence of any candidate at or after `from`.
///
/// Ties at the same index go to the candidate listed first, so longer markers
/// must be listed before their prefixes.
pub fn find_first_unescaped<'a, T>(
    text: &str,
    from: usize,
    candidates: &'a [T],
    token: impl Fn(&T) -> &str,
) -> Option<(usize, &'a T)> {
    candidates
        .iter()
        .filter_map(|candidate| {
            index_of_unescaped(text, token(candidate), from).map(|index| (index, candidate))
        })
        .min_by_key(|(index, _)| *index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_parity() {
        assert!(!is_escaped("*", 0));
        assert!(is_escaped(r"\*", 1));
        assert!(!is_escaped(r"\\*", 2));
        assert!(is_escaped(r"\\\*", 3));
        assert!(!is_escaped(r"a\b", 1));
    }

    #[test]
    fn unescape_long_escape_runs() {
        let run = "\\".repeat(40_001);
        let text = format!("{run}*");
        let started = std::time::Instant::now();
        let unescaped = unescape(&text);
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(unescaped, format!("{}*", "\\".repeat(20_000)));
        assert_eq!(unescape(&"\\".repeat(40_000)), "\\".repeat(20_000));
    }

    #[test]
    fn escape_inserts_before_reserved() {
        assert_eq!(escape("a*b_c"), r"a\*b\_c");
        assert_eq!(escape(r"back\slash"), r"back\\slash");
        assert_eq!(escape("**"), r"\*\*");
        assert_eq!(escape("plain # text"), "plain # text");
    }

    #[test]
    fn escape_with_custom_reserved() {
        assert_eq!(escape_with("#*", &['#']), r"\#*");
    }

    #[test]
    fn unescape_reverses_escape() {
        for sample in ["", "plain", r"\", r"\\", r"\*", "*_*", r"a\\*b", "é\\ü*"] {
            assert_eq!(unescape(&escape(sample)), sample, "sample {sample:?}");
        }
    }

    #[test]
    fn unescape_drops_escape_before_any_char() {
        assert_eq!(unescape(r"\#title"), "#title");
        assert_eq!(unescape(r"a\\\*"), r"a\*");
        assert_eq!(unescape(r"trailing\"), r"trailing\");
    }

    #[test]
    fn index_of_unescaped_skips_escaped_hits() {
        assert_eq!(index_of_unescaped(r"\*a*", "*", 0), Some(3));
        assert_eq!(index_of_unescaped(r"\\*", "*", 0), Some(2));
        assert_eq!(index_of_unescaped("a*b*", "*", 2), Some(3));
        assert_eq!(index_of_unescaped(r"\*", "*", 0), None);
        assert_eq!(index_of_unescaped("abc", "*", 10), None);
    }

    #[test]
    fn escaped_hit_does_not_hide_overlapping_match() {
        assert_eq!(index_of_unescaped(r"\___b__", "__", 0), Some(2));
        let markers = ["__", "_"];
        let hit = find_first_unescaped(r"\___b__", 0, &markers, |m| m);
        assert_eq!(hit, Some((2, &"__")));
    }

    #[test]
    fn find_first_prefers_earlier_candidate_on_tie() {
        let markers = ["**", "*"];
        let hit = find_first_unescaped("a**b", 0, &markers, |m| m);
        assert_eq!(hit, Some((1, &"**")));
        let hit = find_first_unescaped("a*b**", 0, &markers, |m| m);
        assert_eq!(hit, Some((1, &"*")));
        assert_eq!(find_first_unescaped("ab", 0, &markers, |m| m), None);
    }
}
