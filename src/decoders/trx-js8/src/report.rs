// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Signal report text form: a signed, zero-padded, 3-character field.

use crate::words::matches_call;

pub const REPORT_MIN: i32 = -50;
pub const REPORT_MAX: i32 = 49;

/// Format an SNR as a signal report, e.g. `-08`, `+00`, `+15`.
pub fn encode_report(snr: i32) -> String {
    let sr = snr.clamp(REPORT_MIN, REPORT_MAX);
    let abs = sr.abs();
    if sr > 9 {
        format!("+{abs}")
    } else if sr >= 0 {
        format!("+0{abs}")
    } else if sr >= -9 {
        format!("-0{abs}")
    } else {
        format!("-{abs}")
    }
}

/// Parse a bare report token. `None` unless it is an integer in range.
pub fn decode_report(text: &str) -> Option<i32> {
    text.parse::<i32>()
        .ok()
        .filter(|v| (REPORT_MIN..=REPORT_MAX).contains(v))
}

/// Parse a report word that may carry a roger prefix (`R-08`).
///
/// Returns the report text without the prefix.
pub fn report_from_word(word: &str) -> Option<&str> {
    if decode_report(word).is_some() {
        return Some(word);
    }
    let rest = word.strip_prefix('R')?;
    decode_report(rest).map(|_| rest)
}

/// Outcome of looking for a report in a standard message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardReport {
    /// Mirrors the message's standard flag whether or not a report was found
    pub is_standard: bool,
    /// Report text as sent, without any roger prefix
    pub report: Option<String>,
}

impl StandardReport {
    pub fn value(&self) -> Option<i32> {
        self.report.as_deref().and_then(decode_report)
    }
}

/// Find the signal report in a standard exchange such as `W9XYZ K1ABC R-08`.
///
/// The message qualifies when its first word is `contact_base_call` or its
/// second word is `caller_base_call`, either optionally carrying a
/// `/`-separated prefix or suffix. The word after the two calls is then read
/// as a plain or roger report.
pub fn extract_report(
    message: &str,
    is_standard: bool,
    caller_base_call: &str,
    contact_base_call: &str,
) -> StandardReport {
    let mut out = StandardReport {
        is_standard,
        report: None,
    };
    if !is_standard {
        return out;
    }

    let words: Vec<&str> = message.split_whitespace().collect();
    let Some(first) = words.first() else {
        return out;
    };
    let addressed = matches_call(first, contact_base_call)
        || (words.len() > 1
            && !caller_base_call.is_empty()
            && matches_call(words[1], caller_base_call));
    if addressed {
        let candidate = words.get(2).copied().unwrap_or_default();
        out.report = report_from_word(candidate).map(str::to_string);
    }
    out
}
