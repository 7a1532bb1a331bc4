use camino::Utf8Path;
use std::io::BufRead;
use tracing::debug;

use crate::astrocat_errors::AstrocatError;

use super::source::{open_local, RemoteSource};

/// Provider of the lines of a remote star database.
///
/// The fetch, cache and decompression policy belongs entirely to the implementation;
/// [`StarLookup`](crate::hipparcos::StarLookup) only asks for a fresh reader per scan.
pub trait ContentSource {
    fn open(&self, remote: &RemoteSource) -> Result<Box<dyn BufRead>, AstrocatError>;
}

/// Download the remote file once into its cache directory, then read the cached copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedDownload;

impl ContentSource for CachedDownload {
    fn open(&self, remote: &RemoteSource) -> Result<Box<dyn BufRead>, AstrocatError> {
        let local_file = remote.cached_path()?;

        if local_file.exists() {
            debug!(url = %remote.url, path = %local_file, "using cached star database");
        } else {
            fetch(&remote.url, &local_file)?;
        }

        Ok(open_local(&local_file)?)
    }
}

/// Download `url` to `local_file`, going through a `.part` file so that an interrupted
/// download never looks like a valid cache entry.
#[cfg(feature = "remote-download")]
fn fetch(url: &str, local_file: &Utf8Path) -> Result<(), AstrocatError> {
    use std::fs;

    if let Some(parent) = local_file.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            AstrocatError::CacheDirError(format!("{parent}: {err}"))
        })?;
    }
    let partial = local_file.with_extension(match local_file.extension() {
        Some(ext) => format!("{ext}.part"),
        None => "part".to_string(),
    });

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(download_big_file(url, &partial))
        .inspect_err(|_| {
            let _ = fs::remove_file(&partial);
        })?;

    fs::rename(&partial, local_file)?;
    Ok(())
}

#[cfg(not(feature = "remote-download"))]
fn fetch(url: &str, _local_file: &Utf8Path) -> Result<(), AstrocatError> {
    Err(AstrocatError::DownloadError(format!(
        "{url} is not cached and the remote-download feature is disabled"
    )))
}

/// Download a large file from a URL
/// Uses reqwest to download the file in chunks
/// and saves it to the specified path using tokio's async file I/O
/// and stream processing.
///
/// Arguments
/// ---------
/// * `url`: the URL of the file to download
/// * `path`: the path to save the downloaded file
///
/// Return
/// ------
/// * An error if the request fails, the server answers with an error status, or the
///   file cannot be written
#[cfg(feature = "remote-download")]
async fn download_big_file(url: &str, path: &Utf8Path) -> Result<(), AstrocatError> {
    use tokio::{fs::File, io::AsyncWriteExt};
    use tokio_stream::StreamExt;
    use tracing::info;

    let mut file = File::create(path).await?;
    info!(url, "downloading star database");

    let mut stream = reqwest::get(url).await?.error_for_status()?.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    info!(url, path = %path, "downloaded star database");
    Ok(())
}

#[cfg(test)]
mod download_test {
    use super::*;
    use std::{fs, io::Read};

    #[test]
    fn test_cached_copy_is_read_without_download() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Utf8Path::from_path(dir.path()).unwrap();
        fs::write(cache.join("hip_main.dat"), "cached content\n").unwrap();

        let remote =
            RemoteSource::new("https://invalid.example/cats/hip_main.dat").with_cache_dir(cache);
        let mut content = String::new();
        CachedDownload
            .open(&remote)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "cached content\n");
    }
}
