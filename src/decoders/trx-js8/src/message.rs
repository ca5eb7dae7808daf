// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! The decoded-message record.

use trx_core::decode::{FrameType, Js8Message, TransmissionFlags};

use crate::cascade::{self, Unpacked};
use crate::codec::{FrameCodec, LegacyCodec};
use crate::columns::{strip_annotation, Columns};
use crate::config::DecoderConfig;
use crate::report::{encode_report, extract_report, StandardReport};
use crate::standard::is_standard_message;
use crate::words::{free_text_words, has_standard_preamble, standard_words};

/// One classified line of decoder output.
///
/// Classification happens entirely at construction; afterwards the record
/// is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMessage {
    raw_line: String,
    payload: String,
    is_standard: bool,
    flags: TransmissionFlags,
    submode: u8,
    frame_type: FrameType,
    is_heartbeat: bool,
    is_alt: bool,
    compound: String,
    extra: String,
    directed: Vec<String>,
    contest_mode: bool,
}

impl DecodedMessage {
    fn blank(raw_line: String, payload: String, flags: TransmissionFlags, submode: u8) -> Self {
        Self {
            raw_line,
            payload,
            is_standard: false,
            flags,
            submode,
            frame_type: FrameType::Unknown,
            is_heartbeat: false,
            is_alt: false,
            compound: String::new(),
            extra: String::new(),
            directed: Vec::new(),
            contest_mode: false,
        }
    }

    /// Classify a legacy fixed-column decode line.
    pub fn from_line(
        line: &str,
        config: &DecoderConfig,
        legacy: &dyn LegacyCodec,
        frames: &dyn FrameCodec,
    ) -> Self {
        let raw_line = strip_annotation(line).to_string();
        let columns = Columns::new(&raw_line);
        let payload = columns.payload();
        let submode = columns.submode();

        let mut msg = Self::blank(raw_line, payload, TransmissionFlags::default(), submode);
        msg.contest_mode = config.contest_mode;
        msg.is_standard =
            is_standard_message(legacy, &msg.payload, config.contest_mode, &config.my_grid);
        msg.try_unpack(frames);
        msg
    }

    /// Classify an already-unpacked payload delivered with its side-channel
    /// flags and submode.
    pub fn from_payload(
        payload: &str,
        bits: u8,
        submode: u8,
        config: &DecoderConfig,
        frames: &dyn FrameCodec,
    ) -> Self {
        let mut msg = Self::blank(
            payload.to_string(),
            payload.to_string(),
            TransmissionFlags(bits),
            submode,
        );
        msg.contest_mode = config.contest_mode;
        msg.is_standard = has_standard_preamble(&msg.payload);
        msg.try_unpack(frames);
        msg
    }

    fn try_unpack(&mut self, frames: &dyn FrameCodec) -> bool {
        if self.is_standard {
            self.payload.push(' ');
            return false;
        }
        match cascade::unpack(frames, &self.payload, self.flags) {
            Some(unpacked) => {
                self.commit(unpacked);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, unpacked: Unpacked) {
        self.frame_type = unpacked.frame_type;
        if let Some(text) = unpacked.text {
            self.payload = text;
        }
        self.is_heartbeat = unpacked.is_heartbeat;
        self.is_alt = unpacked.is_alt;
        self.compound = unpacked.compound;
        self.extra = unpacked.extra;
        self.directed = unpacked.directed;
    }

    fn columns(&self) -> Columns<'_> {
        Columns::new(&self.raw_line)
    }

    /// Input line with any UI annotation removed.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Human-readable payload.
    pub fn message(&self) -> &str {
        &self.payload
    }

    pub fn is_standard(&self) -> bool {
        self.is_standard
    }

    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    pub fn bits(&self) -> u8 {
        self.flags.bits()
    }

    pub fn submode(&self) -> u8 {
        self.submode
    }

    pub fn is_heartbeat(&self) -> bool {
        self.is_heartbeat
    }

    pub fn is_alt(&self) -> bool {
        self.is_alt
    }

    pub fn is_compound(&self) -> bool {
        !self.compound.is_empty()
    }

    pub fn compound_call(&self) -> &str {
        &self.compound
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }

    pub fn is_directed(&self) -> bool {
        self.directed.len() > 2
    }

    pub fn directed_parts(&self) -> &[String] {
        &self.directed
    }

    // Column accessors; meaningful only for legacy fixed-column input.

    pub fn frequency_offset(&self) -> i32 {
        self.columns().frequency_offset()
    }

    pub fn snr(&self) -> i32 {
        self.columns().snr()
    }

    pub fn dt(&self) -> f32 {
        self.columns().dt()
    }

    pub fn time_in_seconds(&self) -> u32 {
        self.columns().time_in_seconds()
    }

    pub fn is_low_confidence(&self) -> bool {
        self.columns().is_low_confidence()
    }

    pub fn is_jt65(&self) -> bool {
        self.columns().is_jt65()
    }

    pub fn is_jt9(&self) -> bool {
        self.columns().is_jt9()
    }

    /// SNR column as a signal report (`-08`).
    pub fn report(&self) -> String {
        encode_report(self.snr())
    }

    /// Look for a signal report sent by `caller_base_call` to
    /// `contact_base_call`.
    pub fn find_report(&self, caller_base_call: &str, contact_base_call: &str) -> StandardReport {
        extract_report(
            &self.payload,
            self.is_standard,
            caller_base_call,
            contact_base_call,
        )
    }

    /// Up to four protocol words, preceded by the text they were taken from.
    ///
    /// Standard messages go through the word grammar and always yield five
    /// entries; free text is split on spaces.
    pub fn message_words(&self) -> Vec<String> {
        if self.is_standard {
            standard_words(&self.payload).into_vec()
        } else {
            free_text_words(&self.payload)
        }
    }

    /// Second and third protocol words, usually the sender and grid.
    pub fn de_call_and_grid(&self) -> (String, String) {
        let words = standard_words(&self.payload);
        if self.contest_mode && words.word3 == "R" {
            (words.word2, words.word4)
        } else {
            (words.word2, words.word3)
        }
    }

    pub fn to_record(&self) -> Js8Message {
        Js8Message {
            frame_type: self.frame_type,
            text: self.payload.clone(),
            is_standard: self.is_standard,
            compound: self.compound.clone(),
            directed: self.directed.clone(),
            is_heartbeat: self.is_heartbeat,
            is_alt: self.is_alt,
            bits: self.flags.bits(),
            submode: self.submode,
        }
    }
}
