//! Reading and atomically rewriting HTML documents.

use crate::utils::error::PatchError;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a document, mapping a missing file to `PatchError::NotFound`
pub fn read_document(path: &Path) -> Result<String, PatchError> {
    debug!("Reading document: {}", path.display());

    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PatchError::NotFound(path.to_path_buf()),
        _ => PatchError::Io(e),
    })
}

/// Replace `path` with `contents` through a temp file in the same directory
///
/// The rename is atomic on the same filesystem, so readers see either the
/// old or the new document. Existing permissions carry over.
///
/// # Errors
/// * `PatchError::Io` - Temp file could not be created or written
/// * `PatchError::Persist` - Rename over `path` failed
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), PatchError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| PatchError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.html");

        match read_document(&path) {
            Err(PatchError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
