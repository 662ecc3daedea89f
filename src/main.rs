use std::io;

use anyhow::{Context, Result};
use log::info;

use read_file::{logging, report, FileReader, ReadRequest};

// One read, one outcome: a single-threaded runtime is all this needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let reader = FileReader::new(ReadRequest::default());
    info!("Requesting {}", reader.request().path().display());

    let pending = reader.spawn();
    let outcome = pending.await.context("Read task did not complete")?;

    // A failed read is reported, not escalated: exit status stays 0.
    report::write_outcome(&mut io::stdout().lock(), &outcome)
        .context("Failed to write to stdout")?;

    Ok(())
}
