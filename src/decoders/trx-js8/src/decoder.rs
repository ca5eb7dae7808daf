// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::sync::Arc;

use crate::codec::{FrameCodec, LegacyCodec};
use crate::config::DecoderConfig;
use crate::message::DecodedMessage;

/// Owns the codecs and configuration and turns input into
/// [`DecodedMessage`]s.
///
/// Decoding holds no mutable state, so one decoder can be shared across
/// threads.
#[derive(Clone)]
pub struct Js8Decoder {
    config: DecoderConfig,
    legacy: Arc<dyn LegacyCodec>,
    frames: Arc<dyn FrameCodec>,
}

impl Js8Decoder {
    pub fn new(
        config: DecoderConfig,
        legacy: Arc<dyn LegacyCodec>,
        frames: Arc<dyn FrameCodec>,
    ) -> Self {
        Self {
            config,
            legacy,
            frames,
        }
    }

    /// Decode one legacy fixed-column line.
    pub fn decode_line(&self, line: &str) -> DecodedMessage {
        DecodedMessage::from_line(line, &self.config, self.legacy.as_ref(), self.frames.as_ref())
    }

    /// Decode a payload delivered with its transmission bits and submode.
    pub fn decode_payload(&self, payload: &str, bits: u8, submode: u8) -> DecodedMessage {
        DecodedMessage::from_payload(payload, bits, submode, &self.config, self.frames.as_ref())
    }
}

impl std::fmt::Debug for Js8Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Js8Decoder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
