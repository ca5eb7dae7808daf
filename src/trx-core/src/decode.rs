// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Shared types for decoded JS8 frames.

use serde::{Deserialize, Serialize};

/// Frame family of a decoded JS8 payload.
///
/// The discriminants are the 3-bit type tags used on the air; `Unknown`
/// is a sentinel that never appears in a packed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum FrameType {
    Heartbeat = 0,
    Compound = 1,
    CompoundDirected = 2,
    Directed = 3,
    Data = 4,
    DataCompressed = 6,
    #[default]
    Unknown = 255,
}

impl FrameType {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::Heartbeat => "heartbeat",
            FrameType::Compound => "compound",
            FrameType::CompoundDirected => "compound_directed",
            FrameType::Directed => "directed",
            FrameType::Data => "data",
            FrameType::DataCompressed => "data_compressed",
            FrameType::Unknown => "unknown",
        }
    }
}

/// Transmission bit flags delivered alongside a packed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransmissionFlags(pub u8);

impl TransmissionFlags {
    /// Any frame of a message other than the first or last.
    pub const NORMAL: u8 = 0;
    /// First frame of a message.
    pub const FIRST: u8 = 1;
    /// Last frame of a message.
    pub const LAST: u8 = 2;
    /// Flagged frame carrying fast data with no frame type header.
    pub const DATA: u8 = 4;

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_fast_data(self) -> bool {
        self.0 & Self::DATA == Self::DATA
    }
}

impl From<u8> for TransmissionFlags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

/// A classified JS8 message as handed to UI and logging collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Js8Message {
    pub frame_type: FrameType,
    /// Human-readable rendering of the payload
    pub text: String,
    pub is_standard: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub compound: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub directed: Vec<String>,
    pub is_heartbeat: bool,
    pub is_alt: bool,
    pub bits: u8,
    pub submode: u8,
}
