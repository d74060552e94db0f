//! The single-pass word scanner behind every count operation.

use super::WordCountOptions;

/// Characters kept inside a word when a letter or digit follows them.
const JOINERS: &[char] = &['-', '\'', '\u{2019}'];

/// Accumulates word characters and reports each finished word.
///
/// Text can be fed in several chunks (one per segment); a word only ends at a
/// non-word character, a separator, or [`Scanner::finish`].
pub(crate) struct Scanner<'o, F: FnMut(&str)> {
    options: &'o WordCountOptions,
    fold_case: bool,
    buffer: String,
    pending_joiner: Option<char>,
    on_word: F,
}

impl<'o, F: FnMut(&str)> Scanner<'o, F> {
    /// `fold_case` lower-cases words before reporting them unless the
    /// options ask for case-sensitive counting.
    pub(crate) fn new(options: &'o WordCountOptions, fold_case: bool, on_word: F) -> Self {
        Self {
            options,
            fold_case: fold_case && !options.case_sensitive,
            buffer: String::new(),
            pending_joiner: None,
            on_word,
        }
    }

    pub(crate) fn feed(&mut self, text: &str) {
        let mut index = 0;
        while let Some(ch) = text[index..].chars().next() {
            if let Some(len) = self.separator_at(&text[index..]) {
                self.flush();
                index += len;
                continue;
            }

            if ch.is_alphanumeric() {
                if let Some(joiner) = self.pending_joiner.take() {
                    self.buffer.push(joiner);
                }
                self.buffer.push(ch);
            } else if JOINERS.contains(&ch) && !self.buffer.is_empty() && self.pending_joiner.is_none() {
                self.pending_joiner = Some(ch);
            } else {
                self.flush();
            }
            index += ch.len_utf8();
        }
    }

    /// End the current word, if any.
    pub(crate) fn flush(&mut self) {
        self.pending_joiner = None;
        if self.buffer.is_empty() {
            return;
        }
        let numeric = !self.buffer.chars().any(char::is_alphabetic);
        if !numeric || self.options.count_numbers {
            if self.fold_case {
                let folded = self.buffer.to_lowercase();
                (self.on_word)(&folded);
            } else {
                (self.on_word)(&self.buffer);
            }
        }
        self.buffer.clear();
    }

    pub(crate) fn finish(mut self) {
        self.flush();
    }

    /// Length of the longest configured separator starting `text`.
    fn separator_at(&self, text: &str) -> Option<usize> {
        self.options
            .separators
            .iter()
            .filter(|sep| !sep.is_empty() && text.starts_with(sep.as_str()))
            .map(String::len)
            .max()
    }
}
