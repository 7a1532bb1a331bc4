//! # Cross-reference resolver
//!
//! Access to the five linked tables of the CDS catalog IV/27A (*HD–DM–GC–HR–HIP–Bayer–
//! Flamsteed Cross Index*), and resolution of a star's proper name to its catalog
//! identity.
//!
//! ## Overview
//! -----------------
//! [`CatalogResolver::open`] opens every table of a directory up front and keeps one
//! buffered handle per [`Table`] for its whole lifetime. Queries rewind the handle of the
//! table they read, so each call is an independent full scan and results never depend on
//! earlier calls.
//!
//! | Operation | Table | Match |
//! |-----------|-------|-------|
//! | [`CatalogResolver::find_by_proper_name`] | `table3.dat` | substring of the proper-name columns |
//! | [`CatalogResolver::find_by_henry_draper`] | `catalog.dat` | HD columns |
//! | [`CatalogResolver::resolve_proper_name`] | both | proper name, then HD join |
//! | [`CatalogResolver::reference`] | `refs.dat` | reference code |
//!
//! ## Concurrency
//! -----------------
//! Queries take `&mut self`: a resolver shares one stream position per table, so
//! concurrent use of one instance needs external synchronization (e.g. a `Mutex`).
//! Separate resolvers share nothing.
//!
//! ## Resource release
//! -----------------
//! Handles are released in [`Table::ALL`] order, either by [`CatalogResolver::close`] or
//! when the resolver is dropped. A failed construction releases the tables opened so far.
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Seek, SeekFrom},
    str::FromStr,
};

use camino::{Utf8Path, Utf8PathBuf};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    astrocat_errors::AstrocatError,
    constants::{
        catalog_cols, table3_cols, CATALOG_FILE, REFS_FILE, TABLE1_FILE, TABLE2_FILE,
        TABLE3_FILE,
    },
    fixed_width::{column, encode_optional},
};

pub mod designation;
pub mod records;

use records::{CatalogRecord, CrossReference, ProperNameRecord, Reference};

/// Logical tables of the cross index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Catalog,
    Table1,
    Table2,
    Table3,
    Refs,
}

impl Table {
    /// Every table, in opening and release order.
    pub const ALL: [Table; 5] = [
        Table::Catalog,
        Table::Table1,
        Table::Table2,
        Table::Table3,
        Table::Refs,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Table::Catalog => CATALOG_FILE,
            Table::Table1 => TABLE1_FILE,
            Table::Table2 => TABLE2_FILE,
            Table::Table3 => TABLE3_FILE,
            Table::Refs => REFS_FILE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Table::Catalog => "catalog",
            Table::Table1 => "table1",
            Table::Table2 => "table2",
            Table::Table3 => "table3",
            Table::Refs => "refs",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|table| table.name() == s)
            .ok_or_else(|| format!("Invalid table name: {s}"))
    }
}

/// Open handles on the five cross-index tables of one directory.
#[derive(Debug)]
pub struct CatalogResolver {
    directory: Utf8PathBuf,
    /// One handle per table, in [`Table::ALL`] order
    handles: Vec<BufReader<File>>,
}

impl CatalogResolver {
    /// Open the five tables of a cross-index directory.
    ///
    /// Arguments
    /// -----------------
    /// * `directory` – Directory holding `catalog.dat`, `table1.dat`, `table2.dat`,
    ///   `table3.dat` and `refs.dat`.
    ///
    /// Return
    /// ----------
    /// * A resolver holding one open handle per table, or [`AstrocatError::OpenError`]
    ///   naming the first file that could not be opened. Construction is all-or-nothing:
    ///   handles opened before the failure are released before returning.
    ///
    /// See also
    /// ------------
    /// * [`CatalogResolver::close`] – Explicit release of the handles.
    pub fn open(directory: impl AsRef<Utf8Path>) -> Result<Self, AstrocatError> {
        let directory = directory.as_ref().to_path_buf();

        let handles = Table::ALL
            .iter()
            .map(|table| {
                let path = directory.join(table.file_name());
                File::open(&path)
                    .map(BufReader::new)
                    .map_err(|source| AstrocatError::OpenError {
                        file: path.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(directory = %directory, "opened cross-reference tables");
        Ok(CatalogResolver { directory, handles })
    }

    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// Decode a single `catalog.dat` line. Pure; the tables are not touched.
    pub fn decode_catalog_line(line: &str) -> Result<CatalogRecord, AstrocatError> {
        CatalogRecord::from_line(line)
    }

    /// Rewind a table and iterate over its lines from the start.
    ///
    /// This is the raw access path to every table, including `table1` and `table2`
    /// which have no dedicated decoder.
    pub fn table_lines(
        &mut self,
        table: Table,
    ) -> Result<Lines<&mut BufReader<File>>, AstrocatError> {
        let handle = &mut self.handles[table.index()];
        handle.seek(SeekFrom::Start(0))?;
        Ok(handle.lines())
    }

    /// Every `table3.dat` entry whose proper-name columns contain `name`.
    ///
    /// Arguments
    /// -----------------
    /// * `name` – Case-sensitive text searched in columns `21..76`, without normalization.
    ///
    /// Return
    /// ----------
    /// * The matching entries in file order, duplicates included; empty when nothing
    ///   matches.
    /// * [`AstrocatError::ParseError`] as soon as a matching line cannot be decoded.
    ///
    /// Example
    /// -----------------
    /// ```rust,no_run
    /// use astrocat::crossref::CatalogResolver;
    ///
    /// let mut resolver = CatalogResolver::open("data/crossref").unwrap();
    /// for record in resolver.find_by_proper_name("Alchiba").unwrap() {
    ///     println!("{record}");
    /// }
    /// ```
    pub fn find_by_proper_name(
        &mut self,
        name: &str,
    ) -> Result<Vec<ProperNameRecord>, AstrocatError> {
        let mut matches = Vec::new();
        for line in self.table_lines(Table::Table3)? {
            let line = line?;
            if column(&line, table3_cols::PROPER_NAMES, "proper_names")?.contains(name) {
                matches.push(ProperNameRecord::from_line(&line)?);
            }
        }
        debug!(proper_name = name, matches = matches.len(), "proper name lookup");
        Ok(matches)
    }

    /// Every `catalog.dat` line carrying the Henry Draper number `henry_draper`.
    pub fn find_by_henry_draper(
        &mut self,
        henry_draper: u32,
    ) -> Result<Vec<CatalogRecord>, AstrocatError> {
        let pattern = encode_optional(Some(henry_draper), catalog_cols::HENRY_DRAPER.len());
        self.catalog_records_where(|hd_column| hd_column == pattern)
    }

    /// Resolve a proper name to the full catalog identity of each matching entry.
    ///
    /// Runs [`find_by_proper_name`](CatalogResolver::find_by_proper_name), then a single
    /// pass over `catalog.dat` joining on the Henry Draper number. An entry whose star is
    /// missing from the catalog is kept with an empty `catalog` list.
    pub fn resolve_proper_name(
        &mut self,
        name: &str,
    ) -> Result<Vec<CrossReference>, AstrocatError> {
        let proper_names = self.find_by_proper_name(name)?;
        if proper_names.is_empty() {
            return Ok(Vec::new());
        }

        let width = catalog_cols::HENRY_DRAPER.len();
        let wanted: Vec<String> = proper_names
            .iter()
            .map(|record| encode_optional(Some(record.henry_draper), width))
            .unique()
            .collect();

        let by_hd = self
            .catalog_records_where(|hd_column| wanted.iter().any(|hd| hd == hd_column))?
            .into_iter()
            .into_group_map_by(|record| record.henry_draper);

        Ok(proper_names
            .into_iter()
            .map(|proper_name| CrossReference {
                catalog: by_hd
                    .get(&Some(proper_name.henry_draper))
                    .cloned()
                    .unwrap_or_default(),
                proper_name,
            })
            .collect())
    }

    /// Look up a bibliographic reference by its code in `refs.dat`.
    pub fn reference(&mut self, code: &str) -> Result<Option<Reference>, AstrocatError> {
        for line in self.table_lines(Table::Refs)? {
            if let Some(reference) = Reference::from_line(&line?) {
                if reference.code == code {
                    return Ok(Some(reference));
                }
            }
        }
        Ok(None)
    }

    /// Release every handle, in [`Table::ALL`] order.
    pub fn close(mut self) {
        self.release();
    }

    fn catalog_records_where(
        &mut self,
        mut hd_matches: impl FnMut(&str) -> bool,
    ) -> Result<Vec<CatalogRecord>, AstrocatError> {
        let mut records = Vec::new();
        for line in self.table_lines(Table::Catalog)? {
            let line = line?;
            if hd_matches(column(&line, catalog_cols::HENRY_DRAPER, "henry_draper")?) {
                records.push(CatalogRecord::from_line(&line)?);
            }
        }
        Ok(records)
    }

    fn release(&mut self) {
        for (table, handle) in Table::ALL.iter().zip(self.handles.drain(..)) {
            drop(handle);
            trace!(%table, "released table handle");
        }
        debug!(directory = %self.directory, "closed cross-reference tables");
    }
}

impl Drop for CatalogResolver {
    fn drop(&mut self) {
        if !self.handles.is_empty() {
            self.release();
        }
    }
}
