//! `.scrobbler.log` writing
//!
//! Renders records in the AUDIOSCROBBLER/1.1 layout and puts the file in
//! place atomically: the document is written to a temporary file next to
//! the destination and renamed over it only once fully flushed.

use crate::constants::{LINE_TERMINATOR, LOG_HEADER};
use crate::error::{Result, ScrobbleError};
use crate::models::Record;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

/// Render the full log document: header lines, then one line per record
pub fn render_log(records: &[Record]) -> String {
    let mut document = String::new();

    for line in LOG_HEADER {
        document.push_str(line);
        document.push(LINE_TERMINATOR);
    }

    for record in records {
        document.push_str(&record.to_log_line());
        document.push(LINE_TERMINATOR);
    }

    document
}

/// Writes a scrobble log to a fixed destination path
#[derive(Debug)]
pub struct ScrobbleLogWriter {
    output_path: PathBuf,
}

impl ScrobbleLogWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write the log, replacing any existing file at the destination
    pub fn write(&self, records: &[Record]) -> Result<usize> {
        let document = render_log(records);
        let directory = self.staging_directory();

        let mut temp_file = self.create_staging_file(directory)?;

        temp_file
            .write_all(document.as_bytes())
            .and_then(|()| temp_file.as_file().sync_all())
            .map_err(|e| ScrobbleError::io(&self.output_path, "Failed to write output file", e))?;

        debug!(
            "Wrote {} bytes to {}, moving into place",
            document.len(),
            temp_file.path().display()
        );

        temp_file.persist(&self.output_path).map_err(|e| {
            ScrobbleError::io(&self.output_path, "Failed to replace output file", e.error)
        })?;

        Ok(records.len())
    }

    /// Temporary file carrying the mode the destination should end up with:
    /// the existing file's mode when overwriting, otherwise 0666 less umask.
    fn create_staging_file(&self, directory: &Path) -> Result<NamedTempFile> {
        let mut builder = Builder::new();
        builder.prefix(".scrobblelog-");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // open(2) applies the process umask to this mode
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        let temp_file = builder.tempfile_in(directory).map_err(|e| {
            ScrobbleError::io(
                &self.output_path,
                "Failed to create temporary output file",
                e,
            )
        })?;

        if let Ok(existing) = fs::metadata(&self.output_path) {
            temp_file
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| {
                    ScrobbleError::io(&self.output_path, "Failed to copy output file mode", e)
                })?;
        }

        Ok(temp_file)
    }

    /// Directory holding the temporary file, so the final rename never crosses filesystems
    fn staging_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
