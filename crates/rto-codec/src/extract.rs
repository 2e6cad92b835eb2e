//! Word extraction: whole `[A-Za-z_]` words of a minimum length.

use std::sync::LazyLock;

use regex::bytes::Regex;

static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z_]+").unwrap());

/// A candidate word and where it starts in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateWord<'a> {
    pub word: &'a str,
    pub offset: usize,
}

/// All maximal letter/underscore runs of at least `min_len` bytes, left to
/// right, duplicates included.
///
/// A run touching a digit is part of a longer identifier (`utf8_decode`)
/// and can never be substituted as a whole word, so it is skipped.
pub fn extract_words(text: &[u8], min_len: usize) -> Vec<CandidateWord<'_>> {
    let touches_digit = |i: Option<usize>| i.and_then(|i| text.get(i)).is_some_and(u8::is_ascii_digit);
    WORD_RUN
        .find_iter(text)
        .filter(|m| m.len() >= min_len)
        .filter(|m| !touches_digit(m.start().checked_sub(1)) && !touches_digit(Some(m.end())))
        .filter_map(|m| {
            // Runs are pure ASCII.
            let word = std::str::from_utf8(m.as_bytes()).ok()?;
            Some(CandidateWord { word, offset: m.start() })
        })
        .collect()
}
