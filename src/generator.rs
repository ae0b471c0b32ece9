//! Writes selected component templates into the destination directory.

use std::path::{Path, PathBuf};

use crate::config::GenerationConfig;
use crate::error::{Error, Result};
use crate::templates::template;

/// Generates one file per selected component and returns the written paths
/// in write order.
///
/// The destination directory is created if absent (idempotent), and existing
/// component files are overwritten without warning. There is no rollback:
/// files written before a failure stay on disk, and the failure aborts the
/// remaining writes.
pub fn generate(config: &GenerationConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let destination = resolve_destination(&config.destination)?;
    create_dir_all(&destination)?;

    let mut written = Vec::with_capacity(config.components.len());
    for component in &config.components {
        let target = destination.join(component.file_name(config.typescript));
        let content = template(*component, config.typescript);
        log::debug!("Writing {}", target.display());
        write_file(content, &target)?;
        written.push(target);
    }

    Ok(written)
}

/// Resolves the destination against the current working directory if relative.
fn resolve_destination(destination: &Path) -> Result<PathBuf> {
    if destination.is_absolute() {
        Ok(destination.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|source| Error::GenerationError {
            path: destination.display().to_string(),
            source,
        })?;
        Ok(cwd.join(destination))
    }
}

fn create_dir_all(dest_path: &Path) -> Result<()> {
    std::fs::create_dir_all(dest_path).map_err(|source| Error::GenerationError {
        path: dest_path.display().to_string(),
        source,
    })
}

fn write_file(content: &str, dest_path: &Path) -> Result<()> {
    std::fs::write(dest_path, content).map_err(|source| Error::GenerationError {
        path: dest_path.display().to_string(),
        source,
    })
}
