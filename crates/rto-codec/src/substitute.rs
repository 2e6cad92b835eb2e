//! Tilde escaping and whole-word token substitution.

use std::collections::HashMap;

use rto_core::token::{is_word_byte, TILDE};

use crate::dictionary::Substitution;

/// Double every literal tilde so the expander can tell it from a token.
pub fn escape_tildes(text: &[u8]) -> Vec<u8> {
    let extra = text.iter().filter(|&&b| b == TILDE).count();
    let mut out = Vec::with_capacity(text.len() + extra);
    for &byte in text {
        out.push(byte);
        if byte == TILDE {
            out.push(TILDE);
        }
    }
    out
}

/// Rewrite every whole-word occurrence of a planned word with its token.
///
/// A whole-word match is exactly a maximal `[A-Za-z0-9_]` run equal to the
/// word, so one left-to-right pass over those runs gives the same result as
/// replacing the words one after another, without ever rescanning tokens
/// that were already inserted.
pub fn substitute(escaped: &[u8], plan: &[Substitution]) -> Vec<u8> {
    if plan.is_empty() {
        return escaped.to_vec();
    }
    let rendered: HashMap<&[u8], String> = plan
        .iter()
        .map(|s| (s.word.as_bytes(), s.token.to_string()))
        .collect();

    let mut out = Vec::with_capacity(escaped.len());
    let mut pos = 0;
    while pos < escaped.len() {
        if !is_word_byte(escaped[pos]) {
            out.push(escaped[pos]);
            pos += 1;
            continue;
        }
        let end = escaped[pos..]
            .iter()
            .position(|&b| !is_word_byte(b))
            .map_or(escaped.len(), |n| pos + n);
        let run = &escaped[pos..end];
        match rendered.get(run) {
            Some(token) => out.extend_from_slice(token.as_bytes()),
            None => out.extend_from_slice(run),
        }
        pos = end;
    }
    out
}
