use std::borrow::Cow;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Everything that can go wrong while reading the file. All variants travel
/// down the same failure channel; the variant only shapes the descriptor.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{}: {}, open '{}'", io_code(.source), io_message(.source), .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("EILSEQ: {}, read '{}'", .source, .path.display())]
    Decode { path: PathBuf, source: FromUtf8Error },

    #[error("EINVAL: unsupported encoding '{0}'")]
    UnsupportedEncoding(String),
}

impl ReadError {
    /// Symbolic code of the underlying fault, e.g. `ENOENT`. I/O kinds
    /// without an errno name report the `ErrorKind` name instead.
    pub fn code(&self) -> Cow<'static, str> {
        match self {
            ReadError::Io { source, .. } => io_code(source),
            ReadError::Decode { .. } => Cow::Borrowed("EILSEQ"),
            ReadError::UnsupportedEncoding(_) => Cow::Borrowed("EINVAL"),
        }
    }

    /// Raw OS error number, when the fault came from the operating system.
    pub fn os_error(&self) -> Option<i32> {
        match self {
            ReadError::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

fn io_code(err: &io::Error) -> Cow<'static, str> {
    let code = match err.kind() {
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::PermissionDenied => "EACCES",
        io::ErrorKind::IsADirectory => "EISDIR",
        io::ErrorKind::InvalidInput => "EINVAL",
        io::ErrorKind::Interrupted => "EINTR",
        io::ErrorKind::OutOfMemory => "ENOMEM",
        kind => return Cow::Owned(format!("{kind:?}")),
    };
    Cow::Borrowed(code)
}

// "No such file or directory (os error 2)" -> "no such file or directory"
fn io_message(err: &io::Error) -> String {
    let text = err.to_string();
    let text = match text.rfind(" (os error ") {
        Some(at) => &text[..at],
        None => text.as_str(),
    };

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
