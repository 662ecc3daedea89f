//! Read `file.txt` asynchronously and report the contents, or the reason the
//! read failed, on standard output.

pub mod error;
pub mod logging;
pub mod reader;
pub mod report;
pub mod request;

pub use error::ReadError;
pub use reader::{read, FileReader, ReadResult};
pub use request::{Encoding, ReadRequest};
