//! # Star database sources
//!
//! A star database is read either from a **local file** or from a **remote location**
//! (downloaded once into a cache directory). [`StarSource`] is the configuration value
//! selecting one of the two, and can be parsed from a short descriptor string.
//!
//! ## Descriptors
//! -----------------
//! | Descriptor | Source |
//! |------------|--------|
//! | `http://…`, `https://…`, `ftp://…` | [`StarSource::Remote`] at that URL |
//! | `remote` | [`StarSource::Remote`] at [`HIPPARCOS_URL`] |
//! | `file:<path>` or `<path>` | [`StarSource::File`] |
//!
//! ## Cache layout
//! -----------------
//! Remote files are stored under `<cache dir>/astrocat_cache/hipparcos/<file name>`, where
//! `<cache dir>` is the platform cache directory given by [`directories::BaseDirs`]. The
//! directory can be overridden per source with [`RemoteSource::with_cache_dir`].
//!
//! ## Compression
//! -----------------
//! Local files are opened through [`open_local`], which recognizes gzip streams by their
//! magic number (`1f 8b`) rather than by extension and decompresses them on the fly.
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use flate2::read::MultiGzDecoder;

use crate::{
    astrocat_errors::AstrocatError,
    constants::{CACHE_ROOT, GZIP_MAGIC, HIPPARCOS_CACHE, HIPPARCOS_URL},
};

/// Remote location of a star database and where to cache it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    pub url: String,
    pub cache_dir: Option<Utf8PathBuf>,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        RemoteSource {
            url: url.into(),
            cache_dir: None,
        }
    }

    /// The Hipparcos main catalog at CDS.
    pub fn hipparcos() -> Self {
        RemoteSource::new(HIPPARCOS_URL)
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<Utf8PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    /// Last path segment of the URL, used as the cached file name.
    pub fn file_name(&self) -> Result<&str, AstrocatError> {
        self.url
            .split(&['?', '#'][..])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AstrocatError::InvalidSource(self.url.clone()))
    }

    /// Cache directory of this source: the explicit one, or the platform default.
    pub fn cache_dir(&self) -> Result<Utf8PathBuf, AstrocatError> {
        if let Some(dir) = &self.cache_dir {
            return Ok(dir.clone());
        }
        let base_dir = BaseDirs::new().ok_or_else(|| {
            AstrocatError::CacheDirError("Cannot find the base directory".into())
        })?;
        let cache_path = Utf8Path::from_path(base_dir.cache_dir()).ok_or_else(|| {
            AstrocatError::CacheDirError(format!(
                "Invalid cache path: {}",
                base_dir.cache_dir().display()
            ))
        })?;
        Ok(cache_path.join(CACHE_ROOT).join(HIPPARCOS_CACHE))
    }

    /// Location of the cached copy, whether it exists yet or not.
    pub fn cached_path(&self) -> Result<Utf8PathBuf, AstrocatError> {
        Ok(self.cache_dir()?.join(self.file_name()?))
    }
}

/// Where a [`StarLookup`](crate::hipparcos::StarLookup) reads its lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarSource {
    File(Utf8PathBuf),
    Remote(RemoteSource),
}

impl StarSource {
    /// Pick a source from an optional filename and an optional remote location.
    ///
    /// The filename takes precedence when both are given.
    pub fn select(
        filename: Option<&Utf8Path>,
        remote: Option<RemoteSource>,
    ) -> Result<Self, AstrocatError> {
        match (filename, remote) {
            (Some(path), _) => Ok(StarSource::File(path.to_path_buf())),
            (None, Some(remote)) => Ok(StarSource::Remote(remote)),
            (None, None) => Err(AstrocatError::InvalidSource(
                "neither a filename nor a remote source was given".into(),
            )),
        }
    }
}

impl TryFrom<&str> for StarSource {
    type Error = AstrocatError;

    fn try_from(descriptor: &str) -> Result<Self, Self::Error> {
        let descriptor = descriptor.trim();
        if descriptor.is_empty() {
            return Err(AstrocatError::InvalidSource(descriptor.to_string()));
        }
        if ["http://", "https://", "ftp://"]
            .iter()
            .any(|scheme| descriptor.starts_with(scheme))
        {
            return Ok(StarSource::Remote(RemoteSource::new(descriptor)));
        }
        if descriptor == "remote" {
            return Ok(StarSource::Remote(RemoteSource::hipparcos()));
        }
        let path = descriptor.strip_prefix("file:").unwrap_or(descriptor);
        if path.is_empty() {
            return Err(AstrocatError::InvalidSource(descriptor.to_string()));
        }
        Ok(StarSource::File(Utf8PathBuf::from(path)))
    }
}

impl std::fmt::Display for StarSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StarSource::File(path) => write!(f, "file:{path}"),
            StarSource::Remote(remote) => write!(f, "{}", remote.url),
        }
    }
}

/// Open a local star file for line reading, decompressing gzip content transparently.
pub fn open_local(path: &Utf8Path) -> io::Result<Box<dyn BufRead>> {
    let mut reader = BufReader::new(File::open(path)?);
    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}
