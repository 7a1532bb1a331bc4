//! # Cross-reference records
//!
//! Decoded forms of the lines found in the IV/27A cross-reference tables:
//!
//! | Type | Source | Key |
//! |------|--------|-----|
//! | [`CatalogRecord`] | `catalog.dat` | optional Henry Draper number |
//! | [`ProperNameRecord`] | `table3.dat` | required Henry Draper number |
//! | [`Reference`] | `refs.dat` | reference code |
//!
//! [`CrossReference`] is the join of one proper-name entry with every catalog line sharing
//! its Henry Draper number.
//!
//! ## Error Handling
//! -----------------
//! Blank optional identifiers decode to `None`. Required fields that are blank or
//! malformed produce [`AstrocatError::ParseError`] naming the offending line and field;
//! there is no fallback value.
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    angle::SexagesimalAngle,
    astrocat_errors::AstrocatError,
    constants::{
        catalog_cols, table3_cols, Magnitude, PROPER_NAME_SEPARATOR, REFERENCE_SEPARATOR,
    },
    fixed_width::{column, optional, required},
};

use super::designation::Designation;

/// One star of `catalog.dat`: cross identifiers, position and magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub henry_draper: Option<u32>,
    pub durchmusterung_id: String,
    pub boss_general: Option<u32>,
    pub bright_star: Option<u32>,
    pub hipparcos: Option<u32>,
    pub right_ascension: SexagesimalAngle,
    pub declination: SexagesimalAngle,
    pub magnitude: Magnitude,
    pub flamsteed: Option<u32>,
    pub bayer: String,
    pub constellation: String,
}

impl CatalogRecord {
    /// Decode a single `catalog.dat` line.
    ///
    /// Arguments
    /// -----------------
    /// * `line` – A raw `catalog.dat` record.
    ///
    /// Return
    /// ----------
    /// * The decoded [`CatalogRecord`], or [`AstrocatError::ParseError`] when an identifier
    ///   is not numeric, a position component is missing, or the magnitude is malformed.
    ///
    /// Field Layout
    /// -----------------
    /// * `0..6` HD, `7..19` DM, `20..25` Boss GC, `26..30` BS, `31..37` HIP
    /// * `38..47` RA (h, m, s), `48..57` Dec (d, m, s)
    /// * `58..63` V magnitude, `64..67` Flamsteed, `68..73` Bayer, `74..77` constellation
    pub fn from_line(line: &str) -> Result<Self, AstrocatError> {
        let right_ascension = SexagesimalAngle::hours(
            required(line, catalog_cols::RA_HOURS, "ra_hours")?,
            required(line, catalog_cols::RA_MINUTES, "ra_minutes")?,
            required(line, catalog_cols::RA_SECONDS, "ra_seconds")?,
        );

        let dec_degrees = column(line, catalog_cols::DEC_DEGREES, "dec_degrees")?.trim();
        let negative = dec_degrees.starts_with('-');
        let declination = SexagesimalAngle::degrees(
            negative,
            dec_degrees
                .trim_start_matches(&['-', '+'][..])
                .parse()
                .map_err(|_| AstrocatError::parse(line, "dec_degrees"))?,
            required(line, catalog_cols::DEC_MINUTES, "dec_minutes")?,
            required(line, catalog_cols::DEC_SECONDS, "dec_seconds")?,
        );

        Ok(CatalogRecord {
            henry_draper: optional(line, catalog_cols::HENRY_DRAPER, "henry_draper")?,
            durchmusterung_id: column(line, catalog_cols::DURCHMUSTERUNG, "durchmusterung")?
                .to_string(),
            boss_general: optional(line, catalog_cols::BOSS_GENERAL, "boss_general")?,
            bright_star: optional(line, catalog_cols::BRIGHT_STAR, "bright_star")?,
            hipparcos: optional(line, catalog_cols::HIPPARCOS, "hipparcos")?,
            right_ascension,
            declination,
            magnitude: required(line, catalog_cols::MAGNITUDE, "magnitude")?,
            flamsteed: optional(line, catalog_cols::FLAMSTEED, "flamsteed")?,
            bayer: column(line, catalog_cols::BAYER, "bayer")?.trim().to_string(),
            constellation: column(line, catalog_cols::CONSTELLATION, "constellation")?
                .trim()
                .to_string(),
        })
    }
}

/// One entry of `table3.dat`, linking informal names to a Henry Draper number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProperNameRecord {
    pub henry_draper: u32,
    pub bayer_flamsteed: String,
    pub proper_names: Vec<String>,
    pub reference_codes: Vec<String>,
}

impl ProperNameRecord {
    /// Decode a single `table3.dat` line.
    ///
    /// The proper-name field is split on `;` and the reference field on `,`; the whole
    /// field and every piece are trimmed, and empty pieces are dropped.
    pub fn from_line(line: &str) -> Result<Self, AstrocatError> {
        Ok(ProperNameRecord {
            henry_draper: required(line, table3_cols::HENRY_DRAPER, "henry_draper")?,
            bayer_flamsteed: column(line, table3_cols::BAYER_FLAMSTEED, "bayer_flamsteed")?
                .trim()
                .to_string(),
            proper_names: split_field(
                column(line, table3_cols::PROPER_NAMES, "proper_names")?,
                PROPER_NAME_SEPARATOR,
            ),
            reference_codes: split_field(
                column(line, table3_cols::REFERENCES, "references")?,
                REFERENCE_SEPARATOR,
            ),
        })
    }

    /// Structured view of the Bayer/Flamsteed field, `None` when it does not follow the
    /// `[flamsteed] [bayer] constellation` layout.
    pub fn designation(&self) -> Option<Designation> {
        Designation::parse(&self.bayer_flamsteed)
    }
}

impl std::fmt::Display for ProperNameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HD {} ({}): {} [refs {}]",
            self.henry_draper,
            self.bayer_flamsteed,
            self.proper_names.iter().join("; "),
            self.reference_codes.iter().join(",")
        )
    }
}

fn split_field(field: &str, separator: char) -> Vec<String> {
    field
        .trim()
        .split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// A bibliographic reference of `refs.dat`: a code followed by free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub code: String,
    pub text: String,
}

impl Reference {
    /// Decode a `refs.dat` line, `None` for blank lines.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (code, text) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Some(Reference {
            code: code.to_string(),
            text: text.trim().to_string(),
        })
    }
}

/// A proper-name entry joined with the catalog lines of the same star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    pub proper_name: ProperNameRecord,
    pub catalog: Vec<CatalogRecord>,
}
