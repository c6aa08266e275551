//! Password list file loading

use crate::domain::input_format::InputError;
use crate::domain::password::{Entry, parse_entry};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse password list text, one entry per line
///
/// Blank lines are skipped.
pub fn parse_entries(text: &str) -> Result<Vec<Entry>, InputError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim_end_matches('\r');
            (!line.trim().is_empty()).then_some((index + 1, line))
        })
        .map(|(line, text)| {
            parse_entry(text).map_err(|source| InputError::InvalidEntry { line, source })
        })
        .collect()
}

/// Load the password list at `path`
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&text)?;
    debug!(path = %path.display(), count = entries.len(), "loaded password entries");
    Ok(entries)
}
