// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Standard (legacy compact protocol) message check.

use tracing::{debug, warn};

use crate::codec::LegacyCodec;
use crate::words::has_standard_preamble;

/// Fixed text width handed to the legacy packer.
pub const LEGACY_TEXT_WIDTH: usize = 22;

/// Decide whether `message` is a standard message.
///
/// The text must survive a legacy pack/unpack round trip unchanged and
/// open with a CQ, DE or QRZ preamble. Codec failures count as "not
/// standard".
pub fn is_standard_message(
    codec: &dyn LegacyCodec,
    message: &str,
    contest_mode: bool,
    my_grid: &str,
) -> bool {
    if message.is_empty() {
        return false;
    }

    let padded = format!("{:<width$}", message, width = LEGACY_TEXT_WIDTH);
    let round_trip = codec
        .pack(&padded, LEGACY_TEXT_WIDTH, contest_mode, my_grid)
        .and_then(|packed| codec.unpack_and_compare(&packed, &padded));

    match round_trip {
        Ok(true) => {
            let standard = has_standard_preamble(message);
            if !standard {
                debug!("legacy round trip ok but no CQ/DE/QRZ preamble: {:?}", message);
            }
            standard
        }
        Ok(false) => false,
        Err(e) => {
            warn!("legacy codec failed on {:?}: {}", message, e);
            false
        }
    }
}
