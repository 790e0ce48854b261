use log::debug;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::format::TracklistFormat;

/// `{output_dir}/{stem}.{Format}.txt`
pub fn output_path(output_dir: &Path, stem: &str, format: TracklistFormat) -> PathBuf {
    output_dir.join(format!("{}.{}.txt", stem, format.file_label()))
}

/// Write rendered tracklists into `output_dir`, creating it if needed.
///
/// Returns the written paths in the order of `rendered`.
pub fn write_tracklists(
    output_dir: &Path,
    stem: &str,
    rendered: &[(TracklistFormat, String)],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;

    let mut written = Vec::with_capacity(rendered.len());
    for (format, content) in rendered {
        let path = output_path(output_dir, stem, *format);
        std::fs::write(&path, content).map_err(|e| Error::io(&path, e))?;
        debug!("Wrote {} format to {}", format.file_label(), path.display());
        written.push(path);
    }

    Ok(written)
}
