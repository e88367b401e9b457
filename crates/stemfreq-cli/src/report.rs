use std::fs;
use std::io;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use stemfreq_types::FrequencyRow;
use tempfile::Builder;
use tracing::debug;

use crate::error::PipelineError;

const HEADER: [&str; 2] = ["word", "count"];

/// Write `word,count` followed by one record per row, returning the sink.
///
/// The header is written even when there are no rows.
pub fn write_table<W: io::Write>(out: W, rows: &[FrequencyRow]) -> io::Result<W> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|err| err.into_error())
}

/// Write the report next to `path` and move it into place once complete.
///
/// A failure at any point leaves an existing file at `path` untouched.
pub fn write_report(path: impl AsRef<Path>, rows: &[FrequencyRow]) -> Result<(), PipelineError> {
    let path = path.as_ref();
    let write_err = |source: io::Error| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = temp_builder().tempfile_in(dir).map_err(write_err)?;
    let tmp = write_table(tmp, rows).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    // An existing report keeps its permissions across the rename.
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }
    tmp.persist(path).map_err(|err| write_err(err.error))?;

    debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// New reports get the usual `0666 & !umask` mode rather than tempfile's 0600.
fn temp_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".stemfreq");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}
