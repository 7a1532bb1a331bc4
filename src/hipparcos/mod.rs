//! # Star database lookup
//!
//! Predicate-driven, streaming access to a large line-oriented star database such as the
//! Hipparcos main catalog (~118 000 lines, ~50 MB uncompressed).
//!
//! ## Overview
//! -----------------
//! [`StarLookup`] owns a [`StarSource`] (local file or remote location), a [`LineParser`]
//! turning selected lines into records, and a [`ContentSource`] providing the lines of a
//! remote source. Nothing is loaded up front:
//!
//! - [`StarLookup::scan`] opens the source **on every call** and returns a lazy [`Scan`]
//!   iterator decoding only the lines accepted by the predicate. Memory use does not grow
//!   with the number of matches.
//! - [`StarLookup::get_one`] stops at the first record whose line starts with the
//!   Hipparcos marker and the right-justified identifier.
//! - [`StarLookup::get_many`] runs one full pass and keeps every line whose identifier
//!   columns (`8..14`) belong to the requested set, in file order.
//!
//! ## Example
//! -----------------
//! ```rust,no_run
//! use astrocat::hipparcos::StarLookup;
//!
//! let lookup = StarLookup::from_file("hip_main.dat.gz").unwrap();
//! if let Some(sirius) = lookup.get_one("32349").unwrap() {
//!     println!("{:?} pc", sirius.distance_pc());
//! }
//! let pair = lookup.get_many(["32349", "37279"]).unwrap();
//! assert!(pair.len() <= 2);
//! ```
//!
//! ## Errors
//! -----------------
//! * [`AstrocatError::AccessError`] – the local file failed the construction probe.
//! * [`AstrocatError::IoError`] – the source could not be (re)opened or read mid-scan.
//! * [`AstrocatError::ParseError`] – yielded by the scan at the offending record.
use std::{
    collections::HashSet,
    io::{BufRead, Lines},
};

use camino::Utf8Path;
use tracing::debug;

use crate::{
    astrocat_errors::AstrocatError,
    constants::{hip_cols, HIP_ID_WIDTH, HIP_RECORD_MARKER},
    fixed_width::right_justify,
};

pub mod download;
pub mod parser;
pub mod source;

pub use download::{CachedDownload, ContentSource};
pub use parser::{HipparcosParser, HipparcosStar, LineParser};
pub use source::{RemoteSource, StarSource};

/// Lazy access to a star database.
#[derive(Debug, Clone)]
pub struct StarLookup<P = HipparcosParser, C = CachedDownload> {
    source: StarSource,
    parser: P,
    content: C,
}

impl StarLookup {
    /// Build a lookup over a filename or a remote location.
    ///
    /// Arguments
    /// -----------------
    /// * `filename` – Local star file, plain or gzip. Takes precedence over `remote`.
    /// * `remote` – Remote location, used only when `filename` is `None`.
    ///
    /// Return
    /// ----------
    /// * The lookup, [`AstrocatError::AccessError`] when the local file cannot be read, or
    ///   [`AstrocatError::InvalidSource`] when neither input is given.
    ///
    /// See also
    /// ------------
    /// * [`StarLookup::from_file`], [`StarLookup::from_remote`]
    pub fn new(
        filename: Option<&Utf8Path>,
        remote: Option<RemoteSource>,
    ) -> Result<Self, AstrocatError> {
        Self::from_source(StarSource::select(filename, remote)?)
    }

    /// Build a lookup over a local file, checking that its first line can be read.
    ///
    /// The probe handle is closed before returning; every scan reopens the file.
    pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Self, AstrocatError> {
        let path = path.as_ref();
        probe(path).map_err(|_| AstrocatError::AccessError(path.to_string()))?;
        Ok(StarLookup {
            source: StarSource::File(path.to_path_buf()),
            parser: HipparcosParser,
            content: CachedDownload,
        })
    }

    /// Build a lookup over a remote location. Nothing is fetched until the first scan.
    pub fn from_remote(remote: RemoteSource) -> Self {
        StarLookup {
            source: StarSource::Remote(remote),
            parser: HipparcosParser,
            content: CachedDownload,
        }
    }

    /// Build a lookup from an already selected source, probing local files.
    pub fn from_source(source: StarSource) -> Result<Self, AstrocatError> {
        match source {
            StarSource::File(path) => Self::from_file(path),
            StarSource::Remote(remote) => Ok(Self::from_remote(remote)),
        }
    }
}

fn probe(path: &Utf8Path) -> std::io::Result<()> {
    let mut first_line = String::new();
    source::open_local(path)?.read_line(&mut first_line)?;
    Ok(())
}

impl<P, C> StarLookup<P, C>
where
    P: LineParser,
    C: ContentSource,
{
    /// Replace the line parser, keeping the source.
    pub fn with_parser<Q: LineParser>(self, parser: Q) -> StarLookup<Q, C> {
        StarLookup {
            source: self.source,
            parser,
            content: self.content,
        }
    }

    /// Replace the provider used for remote sources.
    pub fn with_content_source<D: ContentSource>(self, content: D) -> StarLookup<P, D> {
        StarLookup {
            source: self.source,
            parser: self.parser,
            content,
        }
    }

    pub fn source(&self) -> &StarSource {
        &self.source
    }

    fn open(&self) -> Result<Box<dyn BufRead>, AstrocatError> {
        match &self.source {
            StarSource::File(path) => Ok(source::open_local(path)?),
            StarSource::Remote(remote) => self.content.open(remote),
        }
    }

    /// Stream the records whose raw line satisfies `predicate`.
    ///
    /// Each call opens the source anew and the returned iterator makes a single pass
    /// over it. Lines rejected by the predicate are never decoded.
    ///
    /// Arguments
    /// -----------------
    /// * `predicate` – Test applied to every raw line (without its line terminator).
    ///
    /// Return
    /// ----------
    /// * A lazy [`Scan`] yielding `Ok(record)` per accepted line, or `Err` at the first
    ///   unreadable or undecodable accepted line.
    /// * An error if the source cannot be opened.
    pub fn scan<F>(&self, predicate: F) -> Result<Scan<'_, P, F>, AstrocatError>
    where
        F: FnMut(&str) -> bool,
    {
        debug!(source = %self.source, "scanning star database");
        Ok(Scan {
            lines: self.open()?.lines(),
            parser: &self.parser,
            predicate,
        })
    }

    /// Record of the first line carrying `identifier`, or `None`.
    ///
    /// A line matches when it starts with the 8-byte record marker followed by the
    /// identifier right-justified on 6 bytes. The scan stops at the first match.
    pub fn get_one(&self, identifier: &str) -> Result<Option<P::Record>, AstrocatError> {
        let mut pattern = HIP_RECORD_MARKER.to_vec();
        pattern.extend_from_slice(right_justify(identifier, HIP_ID_WIDTH).as_bytes());

        self.scan(|line| line.as_bytes().starts_with(&pattern))?
            .next()
            .transpose()
    }

    /// Records of every line whose identifier columns match one of `identifiers`, in file
    /// order. The whole source is read; repeated entries in the file are all returned.
    pub fn get_many<I, S>(&self, identifiers: I) -> Result<Vec<P::Record>, AstrocatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: HashSet<Vec<u8>> = identifiers
            .into_iter()
            .map(|id| right_justify(id.as_ref(), HIP_ID_WIDTH).into_bytes())
            .collect();
        if patterns.is_empty() {
            return Ok(Vec::new());
        }

        self.scan(|line| {
            line.as_bytes()
                .get(hip_cols::HIP)
                .is_some_and(|id| patterns.contains(id))
        })?
        .collect()
    }
}

/// Single-pass iterator over the accepted records of one scan.
pub struct Scan<'a, P, F> {
    lines: Lines<Box<dyn BufRead>>,
    parser: &'a P,
    predicate: F,
}

impl<P, F> Iterator for Scan<'_, P, F>
where
    P: LineParser,
    F: FnMut(&str) -> bool,
{
    type Item = Result<P::Record, AstrocatError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            if (self.predicate)(&line) {
                return Some(self.parser.parse(&line));
            }
        }
        None
    }
}
