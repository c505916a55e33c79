use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;

/// Opens the CSV destination chosen on the command line.
///
/// A path is created or truncated; no path means standard output.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>, OutputError> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            tracing::info!("Writing CSV to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            tracing::info!("Writing CSV to standard output");
            Ok(Box::new(io::stdout().lock()))
        }
    }
}
