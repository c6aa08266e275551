//! Expense report file loading

use crate::domain::input_format::InputError;
use crate::domain::report::{ReportSet, parse_report};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the report at `path`, one integer per line
pub fn load_report(path: impl AsRef<Path>) -> Result<ReportSet, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parse_report(&text)?;
    debug!(path = %path.display(), count = values.len(), "loaded report");
    Ok(values)
}
