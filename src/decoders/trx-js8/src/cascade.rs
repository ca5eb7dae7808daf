// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Priority-ordered frame unpacking.
//!
//! Branches are tried in table order and the first one whose codec accepts
//! the token wins. The fast-data bit decides which branches are eligible:
//! with it set only fast data is tried, without it everything else is.

use tracing::{debug, warn};

use trx_core::decode::{FrameType, TransmissionFlags};

use crate::codec::{CodecError, FrameCodec};

/// Shortest token any packed frame can produce.
pub const MIN_FRAME_LEN: usize = 12;

/// Placeholder standing in for the hashed compound call of a
/// compound-directed frame.
pub const COMPOUND_MARKER: &str = "<....>";

/// Fields committed to a message by the branch that matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unpacked {
    pub frame_type: FrameType,
    /// Rendered payload; `None` leaves the original text in place
    pub text: Option<String>,
    pub is_heartbeat: bool,
    pub is_alt: bool,
    pub compound: String,
    pub extra: String,
    pub directed: Vec<String>,
}

type UnpackFn = fn(&dyn FrameCodec, &str) -> Result<Option<Unpacked>, CodecError>;

struct Branch {
    name: &'static str,
    eligible: fn(TransmissionFlags) -> bool,
    unpack: UnpackFn,
}

fn fast_data_only(flags: TransmissionFlags) -> bool {
    flags.is_fast_data()
}

fn without_fast_data(flags: TransmissionFlags) -> bool {
    !flags.is_fast_data()
}

const BRANCHES: [Branch; 5] = [
    Branch {
        name: "fast data",
        eligible: fast_data_only,
        unpack: unpack_fast_data,
    },
    Branch {
        name: "data",
        eligible: without_fast_data,
        unpack: unpack_data,
    },
    Branch {
        name: "heartbeat",
        eligible: without_fast_data,
        unpack: unpack_heartbeat,
    },
    Branch {
        name: "compound",
        eligible: without_fast_data,
        unpack: unpack_compound,
    },
    Branch {
        name: "directed",
        eligible: without_fast_data,
        unpack: unpack_directed,
    },
];

/// A candidate frame token: long enough and free of whitespace.
pub fn frame_token(payload: &str) -> Option<&str> {
    let token = payload.trim();
    if token.chars().count() < MIN_FRAME_LEN || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}

/// Run the cascade over `payload`.
///
/// Returns the first branch's result, or `None` when no branch matched.
/// A codec error stops the cascade for this payload.
pub fn unpack(codec: &dyn FrameCodec, payload: &str, flags: TransmissionFlags) -> Option<Unpacked> {
    let token = frame_token(payload)?;

    for branch in BRANCHES.iter().filter(|b| (b.eligible)(flags)) {
        match (branch.unpack)(codec, token) {
            Ok(Some(unpacked)) => {
                debug!(
                    "{} frame {:?} unpacked as {}",
                    branch.name,
                    token,
                    unpacked.frame_type.as_str()
                );
                return Some(unpacked);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("{} unpack of {:?} failed: {}", branch.name, token, e);
                return None;
            }
        }
    }
    None
}

fn data_frame(text: Option<String>) -> Option<Unpacked> {
    text.filter(|t| !t.is_empty()).map(|t| Unpacked {
        frame_type: FrameType::Data,
        text: Some(t),
        ..Unpacked::default()
    })
}

fn unpack_fast_data(codec: &dyn FrameCodec, token: &str) -> Result<Option<Unpacked>, CodecError> {
    Ok(data_frame(codec.unpack_fast_data(token)?))
}

fn unpack_data(codec: &dyn FrameCodec, token: &str) -> Result<Option<Unpacked>, CodecError> {
    Ok(data_frame(codec.unpack_data(token)?))
}

/// Compound call built from the first two non-empty parts, plus the parts
/// that follow the second of them. `None` when fewer than two are present.
fn split_compound(parts: &[String]) -> Option<(String, &[String])> {
    let mut calls = parts.iter().enumerate().filter(|(_, p)| !p.is_empty());
    let (_, first) = calls.next()?;
    let (second_idx, second) = calls.next()?;
    Some((format!("{first}/{second}"), &parts[second_idx + 1..]))
}

fn unpack_heartbeat(codec: &dyn FrameCodec, token: &str) -> Result<Option<Unpacked>, CodecError> {
    let Some(frame) = codec.unpack_heartbeat(token)? else {
        return Ok(None);
    };
    let Some((compound, rest)) = split_compound(&frame.parts) else {
        return Ok(None);
    };
    let extra = rest.first().cloned().unwrap_or_default();
    let text = if frame.is_alt {
        format!(
            "{}: @ALLCALL {} {} ",
            compound,
            codec.cq_string(frame.bits3),
            extra
        )
    } else {
        match codec.hb_string(frame.bits3) {
            "HB" => format!("{compound}: @HB HEARTBEAT {extra} "),
            hb => format!("{compound}: @HB {hb} {extra} "),
        }
    };

    Ok(Some(Unpacked {
        frame_type: frame.frame_type,
        text: Some(text),
        is_heartbeat: true,
        is_alt: frame.is_alt,
        compound,
        extra,
        directed: Vec::new(),
    }))
}

fn unpack_compound(codec: &dyn FrameCodec, token: &str) -> Result<Option<Unpacked>, CodecError> {
    let Some(frame) = codec.unpack_compound(token)? else {
        return Ok(None);
    };
    let Some((compound, rest)) = split_compound(&frame.parts) else {
        return Ok(None);
    };
    let extra = rest.join(" ");
    let mut unpacked = Unpacked {
        frame_type: frame.frame_type,
        ..Unpacked::default()
    };
    match frame.frame_type {
        FrameType::Compound => {
            unpacked.text = Some(format!("{compound}: "));
        }
        FrameType::CompoundDirected => {
            unpacked.text = Some(format!("{compound}{extra} "));
            unpacked.directed = [COMPOUND_MARKER.to_string(), compound.clone()]
                .into_iter()
                .chain(rest.iter().cloned())
                .collect();
        }
        _ => {}
    }
    unpacked.compound = compound;
    unpacked.extra = extra;
    Ok(Some(unpacked))
}

fn unpack_directed(codec: &dyn FrameCodec, token: &str) -> Result<Option<Unpacked>, CodecError> {
    let Some(frame) = codec.unpack_directed(token)? else {
        return Ok(None);
    };
    let parts = frame.parts;
    let text = match parts.as_slice() {
        [] => return Ok(None),
        [from, to, cmd] => format!("{from}: {to}{cmd} "),
        [from, to, cmd, arg] => format!("{from}: {to}{cmd} {arg} "),
        // Free text: parts are joined as-is.
        _ => parts.concat(),
    };
    Ok(Some(Unpacked {
        frame_type: frame.frame_type,
        text: Some(text),
        directed: parts,
        ..Unpacked::default()
    }))
}
