use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the solver binary. Dictionary and grid loading
/// problems are fatal to a run; there is no partial fallback.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Encode(bincode::Error),
    Decode(bincode::Error),
    Json(serde_json::Error),
    UnsupportedVersion { found: u32, expected: u32 },
    BadGrid(String),
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Encode(e) => write!(f, "failed to encode trie: {}", e),
            Error::Decode(e) => write!(f, "failed to decode trie: {}", e),
            Error::Json(e) => write!(f, "bad grid file: {}", e),
            Error::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "unsupported trie file version {} (expected {})",
                    found, expected
                )
            }
            Error::BadGrid(msg) => write!(f, "bad grid: {}", msg),
            Error::Usage(msg) => write!(f, "usage: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Encode(e) | Error::Decode(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
