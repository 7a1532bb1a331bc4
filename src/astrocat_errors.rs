use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstrocatError {
    #[error("File {file} could not be opened: {source}")]
    OpenError {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {field} field in line: {line:?}")]
    ParseError { line: String, field: &'static str },

    #[error("Cannot access {0}")]
    AccessError(String),

    #[error("Invalid star source descriptor: {0}")]
    InvalidSource(String),

    #[error("Cache directory error: {0}")]
    CacheDirError(String),

    #[error("Unable to download {0}")]
    DownloadError(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "remote-download")]
    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

impl AstrocatError {
    pub(crate) fn parse(line: &str, field: &'static str) -> Self {
        AstrocatError::ParseError {
            line: line.to_string(),
            field,
        }
    }
}

impl PartialEq for AstrocatError {
    fn eq(&self, other: &Self) -> bool {
        use AstrocatError::*;
        match (self, other) {
            (OpenError { file: a, .. }, OpenError { file: b, .. }) => a == b,
            (
                ParseError {
                    line: l1,
                    field: f1,
                },
                ParseError {
                    line: l2,
                    field: f2,
                },
            ) => l1 == l2 && f1 == f2,
            (AccessError(a), AccessError(b)) => a == b,
            (InvalidSource(a), InvalidSource(b)) => a == b,
            (CacheDirError(a), CacheDirError(b)) => a == b,
            (DownloadError(a), DownloadError(b)) => a == b,

            // io and http errors carry no comparable payload: same variant is enough
            (IoError(_), IoError(_)) => true,
            #[cfg(feature = "remote-download")]
            (ReqwestError(_), ReqwestError(_)) => true,

            _ => false,
        }
    }
}
