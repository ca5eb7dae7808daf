// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

pub mod decode;

pub use decode::{FrameType, Js8Message, TransmissionFlags};
