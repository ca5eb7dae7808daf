// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Fixed-column layout of a legacy decode line.
//!
//! ```text
//! 2343 -11  0.8 1259 # A YV6BFE F6GUU R-08
//! 234315 -11  0.8 1259 # A YV6BFE F6GUU R-08
//! ```
//!
//! The second form carries seconds in the time field, which pushes every
//! following column two characters to the right. All column reads go
//! through [`Columns::field`] so they shift together.

use crate::words::has_cq_or_qrz_preamble;

pub const COLUMN_TIME: usize = 0;
pub const COLUMN_SNR: usize = 5;
pub const COLUMN_DT: usize = 9;
pub const COLUMN_FREQ: usize = 14;
pub const COLUMN_MODE: usize = 19;
pub const COLUMN_SUBMODE: usize = 20;
pub const COLUMN_PAYLOAD: usize = 22;

/// Characters of payload text kept from the line.
pub const PAYLOAD_WIDTH: usize = 21;

/// First column past the last space of any CQ/QRZ message, before any
/// appended entity name or worked-before marker.
const CQ_ANNOTATION_COLUMN: usize = 16;

const SECONDS_PADDING: usize = 2;
const ANNOTATION_MARKER: char = '\u{a0}';

/// Drop anything a UI appended after a non-breaking space.
pub fn strip_annotation(line: &str) -> &str {
    match line.find(ANNOTATION_MARKER) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn char_slice(s: &str, start: usize, len: usize) -> String {
    s.chars().skip(start).take(len).collect()
}

fn char_left(s: &str, len: usize) -> String {
    s.chars().take(len).collect()
}

/// Column view over a (annotation-stripped) decode line.
#[derive(Debug, Clone, Copy)]
pub struct Columns<'a> {
    line: &'a str,
    padding: usize,
}

impl<'a> Columns<'a> {
    pub fn new(line: &'a str) -> Self {
        let padding = match line.chars().position(|c| c == ' ') {
            Some(idx) if idx > 4 => SECONDS_PADDING,
            _ => 0,
        };
        Self { line, padding }
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// `width` characters at `column`, shifted by the seconds padding.
    pub fn field(&self, column: usize, width: usize) -> String {
        char_slice(self.line, column + self.padding, width)
    }

    fn char_at(&self, column: usize) -> Option<char> {
        self.line.chars().nth(column + self.padding)
    }

    /// Seconds since midnight. The time field is never shifted.
    pub fn time_in_seconds(&self) -> u32 {
        let part = |offset: usize| {
            char_slice(self.line, COLUMN_TIME + offset, 2)
                .trim()
                .parse::<u32>()
                .unwrap_or(0)
        };
        let seconds = if self.padding > 0 { part(4) } else { 0 };
        3600 * part(0) + 60 * part(2) + seconds
    }

    pub fn snr(&self) -> i32 {
        self.field(COLUMN_SNR, 3).trim().parse().unwrap_or(0)
    }

    pub fn dt(&self) -> f32 {
        self.field(COLUMN_DT, 5).trim().parse().unwrap_or(0.0)
    }

    pub fn frequency_offset(&self) -> i32 {
        self.field(COLUMN_FREQ, 4).trim().parse().unwrap_or(0)
    }

    fn marker_at_mode_column(&self, marker: char) -> bool {
        self.line.chars().position(|c| c == marker) == Some(COLUMN_MODE + self.padding)
    }

    pub fn is_jt65(&self) -> bool {
        self.marker_at_mode_column('#')
    }

    pub fn is_jt9(&self) -> bool {
        self.marker_at_mode_column('@')
    }

    /// Submode letter mapped to its alphabet position (`A` = 0).
    pub fn submode(&self) -> u8 {
        match self.field(COLUMN_SUBMODE, 3).trim().chars().next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase() as u8 - b'A',
            _ => 0,
        }
    }

    pub fn is_low_confidence(&self) -> bool {
        self.char_at(COLUMN_PAYLOAD + PAYLOAD_WIDTH) == Some('?')
    }

    /// Everything from the payload column to the end of the line, trimmed.
    pub fn raw_payload(&self) -> String {
        self.line
            .chars()
            .skip(COLUMN_PAYLOAD + self.padding)
            .collect::<String>()
            .trim()
            .to_string()
    }

    pub fn payload(&self) -> String {
        clean_payload(&self.raw_payload())
    }
}

/// Normalize payload text taken from a decode line.
///
/// Keeps the first [`PAYLOAD_WIDTH`] characters, removes `<` / `>`, cuts at a
/// stray carriage return and strips CQ/QRZ annotations.
pub fn clean_payload(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut message: String = text
        .chars()
        .take(PAYLOAD_WIDTH)
        .filter(|c| *c != '<' && *c != '>')
        .collect();

    if let Some(cr) = message.chars().position(|c| c == '\r') {
        // The character in front of the carriage return goes too.
        if cr > 0 {
            message = char_left(&message, cr - 1);
        }
    }

    if has_cq_or_qrz_preamble(&message) {
        let len = message.chars().count();
        let eom = message
            .chars()
            .enumerate()
            .skip(CQ_ANNOTATION_COLUMN)
            .find(|(_, c)| *c == ' ')
            .map(|(idx, _)| idx)
            .unwrap_or(len.saturating_sub(1));
        message = char_left(&message, eom + 1);
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "2343 -11  0.8 1259 # A YV6BFE F6GUU R-08";
    const LINE_SECONDS: &str = "234315 -11  0.8 1259 # A YV6BFE F6GUU R-08";

    #[test]
    fn four_digit_time_has_no_padding() {
        let cols = Columns::new(LINE);
        assert_eq!(cols.padding(), 0);
        assert_eq!(cols.time_in_seconds(), 23 * 3600 + 43 * 60);
        assert_eq!(cols.snr(), -11);
        assert!((cols.dt() - 0.8).abs() < 1e-6);
        assert_eq!(cols.frequency_offset(), 1259);
        assert_eq!(cols.submode(), 0);
        assert!(cols.is_jt65());
        assert!(!cols.is_jt9());
        assert_eq!(cols.payload(), "YV6BFE F6GUU R-08");
    }

    #[test]
    fn seconds_shift_every_column() {
        let cols = Columns::new(LINE_SECONDS);
        assert_eq!(cols.padding(), 2);
        assert_eq!(cols.time_in_seconds(), 23 * 3600 + 43 * 60 + 15);
        assert_eq!(cols.snr(), -11);
        assert!((cols.dt() - 0.8).abs() < 1e-6);
        assert_eq!(cols.frequency_offset(), 1259);
        assert!(cols.is_jt65());
        assert_eq!(cols.payload(), "YV6BFE F6GUU R-08");
    }

    #[test]
    fn single_digit_snr_and_jt9_marker() {
        let cols = Columns::new("2343  -7  0.3  815 @ C KK4DSD W7VP -16");
        assert_eq!(cols.snr(), -7);
        assert_eq!(cols.frequency_offset(), 815);
        assert!(cols.is_jt9());
        assert!(!cols.is_jt65());
        assert_eq!(cols.submode(), 2);
    }

    #[test]
    fn short_line_reads_as_zero() {
        let cols = Columns::new("2343");
        assert_eq!(cols.snr(), 0);
        assert_eq!(cols.frequency_offset(), 0);
        assert_eq!(cols.dt(), 0.0);
        assert_eq!(cols.payload(), "");
        assert!(!cols.is_low_confidence());
    }

    #[test]
    fn low_confidence_marker_follows_payload_field() {
        let line = format!("{} {:<20}?", "2343 -11  0.8 1259 # A", "K1ABC W9XYZ");
        assert!(Columns::new(&line).is_low_confidence());
        assert!(!Columns::new(LINE).is_low_confidence());
    }

    #[test]
    fn annotation_after_nbsp_is_dropped() {
        assert_eq!(strip_annotation("K1ABC\u{a0}Canada"), "K1ABC");
        assert_eq!(strip_annotation("K1ABC"), "K1ABC");
    }

    #[test]
    fn payload_is_capped_and_brackets_removed() {
        assert_eq!(clean_payload("<K1ABC> W9XYZ"), "K1ABC W9XYZ");
        assert_eq!(
            clean_payload("ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            "ABCDEFGHIJKLMNOPQRSTU"
        );
    }

    #[test]
    fn carriage_return_cuts_one_character_early() {
        assert_eq!(clean_payload("K1ABC W9XYZ\rjunk"), "K1ABC W9XY");
        assert_eq!(clean_payload("\rK1ABC"), "\rK1ABC");
    }

    #[test]
    fn cq_annotation_cut_at_first_space_after_column_16() {
        assert_eq!(clean_payload("CQ K1ABC FN42 Canada"), "CQ K1ABC FN42 Canada");
        assert_eq!(clean_payload("CQ DX KA1ABC FN42 USA"), "CQ DX KA1ABC FN42 ");
        assert_eq!(clean_payload("QRZ VK3ACF QF22 AUS B4"), "QRZ VK3ACF QF22 AUS ");
        assert_eq!(clean_payload("CQ K1ABC FN42"), "CQ K1ABC FN42");
    }

    #[test]
    fn non_cq_messages_keep_annotations() {
        assert_eq!(clean_payload("K1ABC W9XYZ FN42 xtra"), "K1ABC W9XYZ FN42 xtra");
    }
}
