//! Token resolution: the single left-to-right scan that undoes substitution
//! and escaping together.

use rto_core::token::{decode_index, is_word_byte, TILDE};
use rto_core::{Tier, WordTable};

use crate::dictionary::LocalDictionary;

/// The three lookup tables a body is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct Tables<'a> {
    pub local: &'a LocalDictionary,
    pub types: &'a WordTable,
    pub global: &'a WordTable,
}

impl<'a> Tables<'a> {
    fn resolve(&self, tier: Tier, index: usize) -> Option<&'a str> {
        match tier {
            Tier::Local => self.local.get(index),
            Tier::Type => self.types.get(index),
            Tier::Global => self.global.get(index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Emitting bytes verbatim.
    Copy,
    /// Just read a `~` at `start`.
    TokenStart { start: usize },
    /// Deciding the tier from the byte after the tilde.
    TierResolve { start: usize },
    /// Consuming index characters that begin at `from`.
    IndexScan { start: usize, tier: Tier, from: usize },
    /// Index literal is `body[from..end]`.
    Emit { start: usize, tier: Tier, from: usize, end: usize },
}

/// Resolve every token in `body`. `~~` becomes `~`; a token whose index is
/// unknown to its tier is copied through unchanged.
pub fn expand_body(body: &[u8], tables: &Tables<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + body.len() / 2);
    let mut state = State::Copy;
    let mut pos = 0;

    loop {
        state = match state {
            State::Copy => match body.get(pos) {
                None => break,
                Some(&TILDE) => State::TokenStart { start: pos },
                Some(&byte) => {
                    out.push(byte);
                    pos += 1;
                    State::Copy
                }
            },
            State::TokenStart { start } => {
                pos = start + 1;
                if body.get(pos) == Some(&TILDE) {
                    out.push(TILDE);
                    pos += 1;
                    State::Copy
                } else {
                    State::TierResolve { start }
                }
            }
            State::TierResolve { start } => match body.get(pos) {
                None => {
                    out.push(TILDE);
                    State::Copy
                }
                Some(&marker) => {
                    let tier = Tier::from_marker(marker);
                    let from = pos + tier.marker_len();
                    State::IndexScan { start, tier, from }
                }
            },
            State::IndexScan { start, tier, from } => {
                let end = body[from..]
                    .iter()
                    .position(|&b| !is_word_byte(b))
                    .map_or(body.len(), |n| from + n);
                State::Emit { start, tier, from, end }
            }
            State::Emit { start, tier, from, end } => {
                let word = decode_index(&body[from..end]).and_then(|i| tables.resolve(tier, i));
                match word {
                    Some(word) => out.extend_from_slice(word.as_bytes()),
                    None => out.extend_from_slice(&body[start..end]),
                }
                pos = end;
                State::Copy
            }
        };
    }
    out
}
