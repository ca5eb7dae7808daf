// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Boundary to the bit-level pack/unpack library.
//!
//! The decoder never inspects packed bits itself. Everything it knows about
//! a token comes through [`LegacyCodec`] and [`FrameCodec`]; implementations
//! must be reentrant and free of hidden global buffers so that independent
//! decoders can share one codec across threads.

use thiserror::Error;

use trx_core::decode::FrameType;

/// Failure raised inside an external codec.
///
/// Returning `Ok(None)` is the normal way to say "not this family";
/// an `Err` is reserved for the codec itself misbehaving.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("codec rejected input: {0}")]
    Rejected(String),
    #[error("codec internal error: {0}")]
    Internal(String),
}

/// Legacy fixed-format message codec used for the standard-message check.
pub trait LegacyCodec: Send + Sync {
    /// Pack `text` (already padded to `width`) into its compact form.
    fn pack(
        &self,
        text: &str,
        width: usize,
        contest_mode: bool,
        my_grid: &str,
    ) -> Result<Vec<u8>, CodecError>;

    /// Unpack `packed` and report whether it reproduces `text` exactly.
    fn unpack_and_compare(&self, packed: &[u8], text: &str) -> Result<bool, CodecError>;
}

/// Heartbeat / all-call frame as returned by the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatFrame {
    pub frame_type: FrameType,
    pub is_alt: bool,
    pub bits3: u8,
    pub parts: Vec<String>,
}

/// Compound or compound-directed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundFrame {
    pub frame_type: FrameType,
    pub bits3: u8,
    pub parts: Vec<String>,
}

/// Directed frame: `[from, to, command]` or `[from, to, command, argument]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedFrame {
    pub frame_type: FrameType,
    pub parts: Vec<String>,
}

const CQ_STRINGS: [&str; 8] = [
    "CQ CQ CQ",
    "CQ DX",
    "CQ QRP",
    "CQ CONTEST",
    "CQ FIELD",
    "CQ FD",
    "CQ CQ",
    "CQ",
];

/// Per-family frame unpackers.
///
/// Each method must return `Ok(None)` for tokens that are not structurally
/// valid for its family and must not panic on arbitrary input.
pub trait FrameCodec: Send + Sync {
    fn unpack_fast_data(&self, token: &str) -> Result<Option<String>, CodecError>;

    fn unpack_data(&self, token: &str) -> Result<Option<String>, CodecError>;

    fn unpack_heartbeat(&self, token: &str) -> Result<Option<HeartbeatFrame>, CodecError>;

    fn unpack_compound(&self, token: &str) -> Result<Option<CompoundFrame>, CodecError>;

    fn unpack_directed(&self, token: &str) -> Result<Option<DirectedFrame>, CodecError>;

    /// All-call text for the 3 auxiliary heartbeat bits.
    fn cq_string(&self, bits3: u8) -> &'static str {
        CQ_STRINGS[usize::from(bits3 & 0x07)]
    }

    /// Heartbeat text for the 3 auxiliary heartbeat bits.
    fn hb_string(&self, _bits3: u8) -> &'static str {
        "HB"
    }
}
