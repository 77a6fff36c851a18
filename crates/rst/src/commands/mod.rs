//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;

use std::path::Path;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Read a source document, normalizing CRLF line endings.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(raw.replace("\r\n", "\n"))
}
