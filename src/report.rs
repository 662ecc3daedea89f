use std::io::{self, Write};

use crate::reader::ReadResult;

pub const SUCCESS_PREFIX: &str = "Content:";
pub const FAILURE_PREFIX: &str = "Falha ao ler o arquivo:";

/// The console line for an outcome, without the trailing newline.
pub fn render(outcome: &ReadResult) -> String {
    match outcome {
        Ok(content) => format!("{SUCCESS_PREFIX} {content}"),
        Err(err) => format!("{FAILURE_PREFIX} {err}"),
    }
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &ReadResult) -> io::Result<()> {
    writeln!(out, "{}", render(outcome))?;
    out.flush()
}
