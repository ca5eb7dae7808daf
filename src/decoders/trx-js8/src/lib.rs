// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! JS8 decoded-text classifier.
//!
//! Takes one line of demodulator output, either a legacy fixed-column decode
//! report or a packed frame token with its transmission bits, and produces a
//! [`DecodedMessage`]: frame type, protocol fields and a readable rendering.
//! Bit-level packing is delegated to [`LegacyCodec`] and [`FrameCodec`]
//! implementations supplied by the caller.

pub mod cascade;
pub mod codec;
pub mod columns;
pub mod config;
mod decoder;
mod message;
pub mod report;
pub mod standard;
pub mod words;

pub use codec::{CodecError, CompoundFrame, DirectedFrame, FrameCodec, HeartbeatFrame, LegacyCodec};
pub use config::{DecoderConfig, DecoderConfigError};
pub use decoder::Js8Decoder;
pub use message::DecodedMessage;
pub use report::{decode_report, encode_report, StandardReport};
pub use words::base_callsign;

pub use trx_core::decode::{FrameType, Js8Message, TransmissionFlags};
