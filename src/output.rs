//! Export file writer
//!
//! Renders the case table in each enabled format and writes it under the
//! configured output directory.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use cubecase_core::export::{format_hardcoded, format_ron, format_triangle_table};
use cubecase_core::CaseTable;

use crate::config::{ExportConfig, ExportKind};

/// Error writing export files
#[derive(Debug)]
pub enum OutputError {
    /// Creating the directory or writing a file failed
    Io { path: PathBuf, source: io::Error },
    /// RON serialization failed
    Ron(ron::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Io { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            OutputError::Ron(e) => write!(f, "RON serialization error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io { source, .. } => Some(source),
            OutputError::Ron(e) => Some(e),
        }
    }
}

impl From<ron::Error> for OutputError {
    fn from(e: ron::Error) -> Self {
        OutputError::Ron(e)
    }
}

/// Render the table in one format
pub fn render(kind: ExportKind, table: &CaseTable) -> Result<String, OutputError> {
    Ok(match kind {
        ExportKind::Hardcoded => format_hardcoded(table),
        ExportKind::TriangleTable => format_triangle_table(table),
        ExportKind::Ron => format_ron(table)?,
    })
}

/// Write every enabled export, returning the paths written
pub fn write_exports(config: &ExportConfig, table: &CaseTable) -> Result<Vec<PathBuf>, OutputError> {
    let outputs = config.enabled_outputs();
    if outputs.is_empty() {
        log::warn!("No export formats enabled, nothing written");
        return Ok(Vec::new());
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| OutputError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(outputs.len());
    for (path, kind) in outputs {
        let text = render(kind, table)?;
        fs::write(&path, text).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote {:?} export to {}", kind, path.display());
        written.push(path);
    }

    Ok(written)
}
