#![forbid(unsafe_code)]

//! Emoji dictionary loading.
//!
//! The source is a header-less CSV with the glyph in column 0 and the
//! shortcode in column 1; further columns are ignored. A missing file is not
//! fatal: the editor runs with an empty dictionary.

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use qj_text::Dictionary;

use crate::error::{Error, Result};

/// Read a dictionary from CSV text.
///
/// Rows with fewer than two columns or an empty shortcode are skipped.
///
/// # Errors
///
/// Returns the CSV error for unreadable input (I/O failure or invalid
/// UTF-8).
pub fn read_dictionary<R: Read>(reader: R) -> std::result::Result<Dictionary, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut dict = Dictionary::new();
    let mut skipped = 0usize;
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(glyph), Some(code)) if !code.trim().is_empty() => {
                dict.insert(code.trim(), glyph.trim());
            }
            _ => {
                skipped += 1;
                warn!(row = row + 1, columns = record.len(), "skipping malformed dictionary row");
            }
        }
    }
    info!(entries = dict.len(), skipped, "dictionary loaded");
    Ok(dict)
}

/// Load the dictionary at `path`, or an empty one if it does not exist.
///
/// # Errors
///
/// Returns [`Error::Dictionary`] when the file exists but cannot be read.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "emoji dictionary not found; suggestions disabled");
            return Ok(Dictionary::new());
        }
        Err(e) => {
            return Err(Error::Dictionary {
                path: path.to_path_buf(),
                source: e.into(),
            });
        }
    };
    read_dictionary(file).map_err(|source| Error::Dictionary {
        path: path.to_path_buf(),
        source,
    })
}
