//! # Constants and type definitions for astrocat
//!
//! This module centralizes the **fixed-width column layouts**, **file names**, and **common
//! type aliases** used throughout the `astrocat` library.
//!
//! ## Overview
//!
//! - Column ranges of the cross-reference tables (CDS catalog IV/27A)
//! - Column ranges of the Hipparcos main catalog (CDS catalog I/239)
//! - Record marker and identifier width used by the star lookup
//! - Default remote location and cache layout of the Hipparcos file
//!
//! All ranges are **0-based, end-exclusive byte ranges**, i.e. the CDS ReadMe column
//! `n1-n2` becomes `n1 - 1..n2`.

use std::ops::Range;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in hours
pub type Hour = f64;
/// Angle in milliarcseconds
pub type MilliArcSec = f64;
/// Visual magnitude
pub type Magnitude = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

// -------------------------------------------------------------------------------------------------
// Cross-reference tables (IV/27A)
// -------------------------------------------------------------------------------------------------

pub const CATALOG_FILE: &str = "catalog.dat";
pub const TABLE1_FILE: &str = "table1.dat";
pub const TABLE2_FILE: &str = "table2.dat";
pub const TABLE3_FILE: &str = "table3.dat";
pub const REFS_FILE: &str = "refs.dat";

/// `catalog.dat` column layout
pub mod catalog_cols {
    use super::Range;

    pub const HENRY_DRAPER: Range<usize> = 0..6;
    pub const DURCHMUSTERUNG: Range<usize> = 7..19;
    pub const BOSS_GENERAL: Range<usize> = 20..25;
    pub const BRIGHT_STAR: Range<usize> = 26..30;
    pub const HIPPARCOS: Range<usize> = 31..37;
    pub const RA_HOURS: Range<usize> = 38..40;
    pub const RA_MINUTES: Range<usize> = 40..42;
    pub const RA_SECONDS: Range<usize> = 42..47;
    pub const DEC_DEGREES: Range<usize> = 48..51;
    pub const DEC_MINUTES: Range<usize> = 51..53;
    pub const DEC_SECONDS: Range<usize> = 53..57;
    pub const MAGNITUDE: Range<usize> = 58..63;
    pub const FLAMSTEED: Range<usize> = 64..67;
    pub const BAYER: Range<usize> = 68..73;
    pub const CONSTELLATION: Range<usize> = 74..77;
}

/// `table3.dat` column layout
pub mod table3_cols {
    use super::Range;

    pub const HENRY_DRAPER: Range<usize> = 0..6;
    pub const BAYER_FLAMSTEED: Range<usize> = 7..20;
    pub const PROPER_NAMES: Range<usize> = 21..76;
    pub const REFERENCES: Range<usize> = 77..100;
}

/// Separator between several proper names of a single star
pub const PROPER_NAME_SEPARATOR: char = ';';
/// Separator between reference codes
pub const REFERENCE_SEPARATOR: char = ',';

// -------------------------------------------------------------------------------------------------
// Hipparcos main catalog (I/239, hip_main.dat)
// -------------------------------------------------------------------------------------------------

/// Leading 8 bytes of every Hipparcos record: catalog flag `H`, separator, padding.
pub const HIP_RECORD_MARKER: &[u8; 8] = b"H|      ";
/// Width of the right-justified Hipparcos identifier field
pub const HIP_ID_WIDTH: usize = 6;

/// `hip_main.dat` column layout
pub mod hip_cols {
    use super::Range;

    pub const HIP: Range<usize> = 8..14;
    pub const VMAG: Range<usize> = 41..46;
    pub const RA_DEG: Range<usize> = 51..63;
    pub const DEC_DEG: Range<usize> = 64..76;
    pub const PARALLAX: Range<usize> = 79..86;
    pub const PM_RA: Range<usize> = 87..95;
    pub const PM_DEC: Range<usize> = 96..104;
}

/// Catalog epoch of the Hipparcos astrometry, J1991.25, as MJD (TT)
pub const HIPPARCOS_EPOCH_MJD: MJD = 48348.5625;

/// Gzip magic number
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Default CDS location of the Hipparcos main catalog
pub const HIPPARCOS_URL: &str = "https://cdsarc.cds.unistra.fr/ftp/cats/I/239/hip_main.dat";

/// Sub-directories of the platform cache directory holding downloaded catalogs
pub const CACHE_ROOT: &str = "astrocat_cache";
pub const HIPPARCOS_CACHE: &str = "hipparcos";
