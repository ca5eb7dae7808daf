// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

pub mod config;

pub use config::{ConfigError, ConfigFile, CONFIG_FILE_NAME};
