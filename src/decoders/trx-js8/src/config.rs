// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Decoder configuration.
//!
//! Loaded from the `[trx-js8]` section of `trx-js8.toml`:
//!
//! ```toml
//! [trx-js8]
//! contest_mode = false
//! my_grid = "FN42"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trx_app::ConfigFile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecoderConfigError {
    #[error("[trx-js8].my_grid '{0}' is not a 4 or 6 character Maidenhead locator")]
    InvalidGrid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Contest exchange handling in the legacy codec and grid lookup
    pub contest_mode: bool,
    /// Station locator handed to the legacy codec; empty when unknown
    pub my_grid: String,
}

impl DecoderConfig {
    pub fn validate(&self) -> Result<(), DecoderConfigError> {
        if self.my_grid.is_empty() || is_maidenhead(&self.my_grid) {
            Ok(())
        } else {
            Err(DecoderConfigError::InvalidGrid(self.my_grid.clone()))
        }
    }
}

fn is_maidenhead(grid: &str) -> bool {
    let b = grid.as_bytes();
    let field = |c: u8| (b'A'..=b'R').contains(&c.to_ascii_uppercase());
    let square = |c: u8| c.is_ascii_digit();
    let subsquare = |c: u8| (b'A'..=b'X').contains(&c.to_ascii_uppercase());
    match b.len() {
        4 => field(b[0]) && field(b[1]) && square(b[2]) && square(b[3]),
        6 => {
            field(b[0])
                && field(b[1])
                && square(b[2])
                && square(b[3])
                && subsquare(b[4])
                && subsquare(b[5])
        }
        _ => false,
    }
}

impl ConfigFile for DecoderConfig {
    fn section_key() -> &'static str {
        "trx-js8"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = DecoderConfig::default();
        assert!(!cfg.contest_mode);
        assert!(cfg.my_grid.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_parse_section() {
        let cfg = DecoderConfig::load_from_str(
            r#"
[trx-js8]
contest_mode = true
my_grid = "FN42"
"#,
        )
        .unwrap();
        assert!(cfg.contest_mode);
        assert_eq!(cfg.my_grid, "FN42");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[trx-js8]\nmy_grid = \"JO91ub\"").unwrap();
        let cfg = DecoderConfig::load_from_file(file.path()).unwrap();
        assert!(!cfg.contest_mode);
        assert_eq!(cfg.my_grid, "JO91ub");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_grid() {
        for grid in ["FN4", "ZZ00", "FN42zz", "12AB"] {
            let cfg = DecoderConfig {
                my_grid: grid.to_string(),
                ..DecoderConfig::default()
            };
            assert_eq!(
                cfg.validate(),
                Err(DecoderConfigError::InvalidGrid(grid.to_string()))
            );
        }
    }
}
