use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::string::FromUtf8Error;

use crate::error::ReadError;

pub const DEFAULT_PATH: &str = "file.txt";
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Text encodings the reader knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
}

impl Encoding {
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, FromUtf8Error> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes),
        }
    }
}

impl FromStr for Encoding {
    type Err = ReadError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            _ => Err(ReadError::UnsupportedEncoding(name.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
        }
    }
}

/// What to read and how to decode it. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    path: PathBuf,
    encoding: Encoding,
}

impl ReadRequest {
    pub fn new(path: impl Into<PathBuf>, encoding: &str) -> Result<Self, ReadError> {
        Ok(Self {
            path: path.into(),
            encoding: encoding.parse()?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl Default for ReadRequest {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            encoding: Encoding::Utf8,
        }
    }
}
