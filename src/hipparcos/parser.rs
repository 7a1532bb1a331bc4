//! # Star database line parsers
//!
//! [`StarLookup`](crate::hipparcos::StarLookup) does not know the shape of the records it
//! returns: every selected line is handed to a [`LineParser`]. The default parser,
//! [`HipparcosParser`], decodes the astrometric subset of the Hipparcos main catalog
//! (`hip_main.dat`, CDS I/239) into a [`HipparcosStar`].
//!
//! Any `Fn(&str) -> Result<R, AstrocatError>` closure is also a [`LineParser`], which
//! allows ad-hoc decoders without a dedicated type.
//!
//! ## Field Layout (I/239 subset)
//! -----------------
//! | Columns | Field | Unit |
//! |---------|-------|------|
//! | `8..14` | HIP identifier | – |
//! | `41..46` | V magnitude | mag |
//! | `51..63` | right ascension, epoch J1991.25 | degree |
//! | `64..76` | declination, epoch J1991.25 | degree |
//! | `79..86` | trigonometric parallax | mas |
//! | `87..95` | proper motion μα* | mas/yr |
//! | `96..104` | proper motion μδ | mas/yr |
//!
//! A handful of Hipparcos entries have no astrometric solution; their position, parallax
//! and proper motion columns are blank and decode to `None`.
use hifitime::{Epoch, TimeScale};
use serde::{Deserialize, Serialize};

use crate::{
    astrocat_errors::AstrocatError,
    constants::{hip_cols, Degree, Magnitude, MilliArcSec, HIPPARCOS_EPOCH_MJD},
    fixed_width::{optional, required},
};

/// Decoder of one line of a star database.
pub trait LineParser {
    type Record;

    fn parse(&self, line: &str) -> Result<Self::Record, AstrocatError>;
}

impl<F, R> LineParser for F
where
    F: Fn(&str) -> Result<R, AstrocatError>,
{
    type Record = R;

    fn parse(&self, line: &str) -> Result<R, AstrocatError> {
        self(line)
    }
}

/// One Hipparcos star as published, without any epoch propagation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HipparcosStar {
    pub hip: u32,
    pub magnitude: Option<Magnitude>,
    pub ra: Option<Degree>,
    pub dec: Option<Degree>,
    pub parallax_mas: Option<MilliArcSec>,
    pub ra_mas_per_year: Option<MilliArcSec>,
    pub dec_mas_per_year: Option<MilliArcSec>,
}

impl HipparcosStar {
    /// Catalog epoch of the astrometric columns, J1991.25 (TT).
    pub fn epoch(&self) -> Epoch {
        Epoch::from_mjd_in_time_scale(HIPPARCOS_EPOCH_MJD, TimeScale::TT)
    }

    /// Distance in parsecs, when the parallax is known and positive.
    pub fn distance_pc(&self) -> Option<f64> {
        self.parallax_mas
            .filter(|plx| *plx > 0.0)
            .map(|plx| 1000.0 / plx)
    }
}

/// Parser of `hip_main.dat` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct HipparcosParser;

impl LineParser for HipparcosParser {
    type Record = HipparcosStar;

    fn parse(&self, line: &str) -> Result<HipparcosStar, AstrocatError> {
        Ok(HipparcosStar {
            hip: required(line, hip_cols::HIP, "hip")?,
            magnitude: optional(line, hip_cols::VMAG, "vmag")?,
            ra: optional(line, hip_cols::RA_DEG, "ra_deg")?,
            dec: optional(line, hip_cols::DEC_DEG, "dec_deg")?,
            parallax_mas: optional(line, hip_cols::PARALLAX, "parallax")?,
            ra_mas_per_year: optional(line, hip_cols::PM_RA, "pm_ra")?,
            dec_mas_per_year: optional(line, hip_cols::PM_DEC, "pm_dec")?,
        })
    }
}
