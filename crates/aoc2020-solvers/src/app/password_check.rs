//! Password check workflow

use crate::domain::input_format::InputError;
use crate::domain::password::{Policy, count_valid};
use crate::infra::password_io::load_entries;
use std::path::Path;
use tracing::info;

/// Load the password list at `path` and count entries valid under `policy`
pub fn run_password_check(path: impl AsRef<Path>, policy: Policy) -> Result<usize, InputError> {
    let entries = load_entries(path)?;
    let valid = count_valid(&entries, policy);
    info!(?policy, total = entries.len(), valid, "checked passwords");
    Ok(valid)
}
