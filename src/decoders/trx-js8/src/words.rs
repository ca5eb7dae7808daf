// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Protocol word grammar for standard messages, plus callsign helpers.

use std::sync::OnceLock;

use regex::Regex;

/// Reserved acknowledgement code that never counts as a grid square.
const ACK_CODE: &str = "RR73";

fn words_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:(?P<word1>(?:CQ|DE|QRZ)(?:\s?DX|\s(?:[A-Z]{2}|[0-9]{3}))|[A-Z0-9/]+)\s)",
            r"(?:(?P<word2>[A-Z0-9/]+)",
            r"(?:\s(?P<word3>[-+A-Z0-9]+)",
            r"(?:\s(?P<word4>OOO|[A-R]{2}[0-9]{2}))?)?)?",
        ))
        .expect("valid word grammar")
    })
}

fn standard_preamble_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:CQ|DE|QRZ)\s").expect("valid preamble pattern"))
}

fn cq_qrz_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:CQ|QRZ)\s").expect("valid CQ/QRZ pattern"))
}

fn callsign_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:[A-Z0-9]{1,4}/)?",
            r"(?P<base>(?:[A-Z]{1,2}|[0-9][A-Z]|[A-Z][0-9])[0-9][A-Z]{1,3})",
            r"(?:/[A-Z0-9]{1,4})?$",
        ))
        .expect("valid callsign pattern")
    })
}

/// True when `text` opens with a `CQ`, `DE` or `QRZ` preamble.
pub fn has_standard_preamble(text: &str) -> bool {
    standard_preamble_re().is_match(text)
}

/// True when `text` opens with a `CQ` or `QRZ` preamble.
pub(crate) fn has_cq_or_qrz_preamble(text: &str) -> bool {
    cq_qrz_re().is_match(text)
}

/// Words captured by the standard-message grammar.
///
/// Missing words are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardWords {
    pub whole: String,
    pub word1: String,
    pub word2: String,
    pub word3: String,
    pub word4: String,
}

impl StandardWords {
    /// Whole match followed by word1..word4.
    pub fn into_vec(self) -> Vec<String> {
        vec![self.whole, self.word1, self.word2, self.word3, self.word4]
    }
}

/// Match the standard-message word grammar against `text`.
///
/// Returns all-empty words when the grammar does not match.
pub fn standard_words(text: &str) -> StandardWords {
    let Some(caps) = words_re().captures(text) else {
        return StandardWords::default();
    };
    let group = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or_default();

    let mut whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
    let mut word4 = group("word4");
    if word4 == ACK_CODE {
        // The acknowledgement code looks like a grid; drop it and the
        // separator in front of it from the match.
        if let Some(w3) = caps.name("word3") {
            whole = &text[..w3.end()];
        }
        word4 = "";
    }

    StandardWords {
        whole: whole.to_string(),
        word1: group("word1").to_string(),
        word2: group("word2").to_string(),
        word3: group("word3").to_string(),
        word4: word4.to_string(),
    }
}

/// Split free text on whitespace, with the whole text prepended as word zero.
pub fn free_text_words(text: &str) -> Vec<String> {
    std::iter::once(text.to_string())
        .chain(text.split_whitespace().map(str::to_string))
        .collect()
}

/// Base callsign of a possibly compound call (`EA8/K1ABC`, `K1ABC/P`).
pub fn base_callsign(call: &str) -> Option<&str> {
    callsign_re()
        .captures(call)
        .and_then(|caps| caps.name("base"))
        .map(|m| m.as_str())
}

/// True when `word` is `call` itself or `call` with a `/` prefix or suffix.
pub(crate) fn matches_call(word: &str, call: &str) -> bool {
    if word == call {
        return true;
    }
    let ends = word
        .strip_suffix(call)
        .is_some_and(|head| head.ends_with('/'));
    let starts = word
        .strip_prefix(call)
        .is_some_and(|tail| tail.starts_with('/'));
    ends || starts
}
