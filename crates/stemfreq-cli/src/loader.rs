use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::PipelineError;

const BOM: char = '\u{feff}';

/// Read a whole UTF-8 file into memory. A leading byte-order mark is dropped.
pub fn load_text(path: impl AsRef<Path>) -> Result<String, PipelineError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::from_utf8(bytes).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }
    debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
