use std::path::PathBuf;

use cdnctl_crypto::SigningError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access profile file {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse profile file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("profile '{0}' not found")]
    NotFound(String),
    #[error("profile with name '{0}' already exists")]
    DuplicateName(String),
    #[error("no profiles found; add one with 'cdnctl config add'")]
    NoProfiles,
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    #[error("failed to sign request: {0}")]
    Signing(#[from] SigningError),
    #[error("failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("credentials cannot be sent as a header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("failed to send HTTP request: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP request failed: {status} {status_text} - {}", String::from_utf8_lossy(.body))]
    Api {
        status: u16,
        status_text: String,
        body: Vec<u8>,
    },
}

impl Error {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// HTTP status of an `Api` error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
