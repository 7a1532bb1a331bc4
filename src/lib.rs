//! # astrocat
//!
//! Readers for fixed-width astronomical catalogs:
//!
//! - [`crossref`] – the five linked tables of the HD–DM–GC–HR–HIP–Bayer–Flamsteed cross
//!   index (CDS IV/27A), with proper-name resolution through [`CatalogResolver`].
//! - [`hipparcos`] – lazy, predicate-filtered scans of a large star database such as
//!   the Hipparcos main catalog, local or remote, through [`StarLookup`].
//!
//! The two parts share no state. Both decode columns with the helpers of
//! [`fixed_width`], and report failures as [`AstrocatError`].
pub mod angle;
pub mod astrocat_errors;
pub mod constants;
pub mod crossref;
pub mod fixed_width;
pub mod hipparcos;

pub use astrocat_errors::AstrocatError;
pub use crossref::{
    records::{CatalogRecord, CrossReference, ProperNameRecord, Reference},
    CatalogResolver, Table,
};
pub use hipparcos::{HipparcosStar, RemoteSource, StarLookup, StarSource};
