//! Atomic output file writing.

use crate::error::{HexBinError, Result};
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Writes `bytes` to `path` through a temporary sibling file that is renamed
/// into place once fully written. On any failure the temporary file is
/// removed and an existing file at `path` is left untouched.
///
/// A symlink at `path` is written through: its target is replaced and the
/// link itself is kept.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".hexbin-").suffix(".tmp");
    if let Some(permissions) = target_permissions(&target) {
        builder.permissions(permissions);
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| HexBinError::write(path, e))?;

    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| HexBinError::write(path, e))?;

    tmp.persist(&target)
        .map_err(|e| HexBinError::write(path, e.error))?;

    Ok(())
}

/// The file to replace: `path` itself, or the file a symlink at `path`
/// points to. A dangling link resolves to its (not yet existing) target.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(_) => {
                let link = fs::read_link(path).map_err(|e| HexBinError::write(path, e))?;
                Ok(match path.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                })
            }
        },
        _ => Ok(path.to_path_buf()),
    }
}

/// Permissions for the new file: those of the file being replaced, if any.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Some(metadata.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
