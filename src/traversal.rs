use std::fs;
use std::path::Path;

use crate::error::TreeError;
use crate::types::{DirEntry, RenderMode};

/// Editor and OS artifacts that are never shown.
pub const EXCLUDED_NAMES: [&str; 2] = [".idea", ".DS_Store"];

/// Read access to a directory tree.
pub trait DirSource {
    /// Lists the immediate children of `dir`, in any order.
    ///
    /// # Errors
    /// Returns an error if `dir` cannot be opened or read as a directory.
    fn list_children(&self, dir: &Path) -> Result<Vec<DirEntry>, TreeError>;

    /// Size in bytes of a non-directory entry.
    ///
    /// # Errors
    /// Returns an error if the entry's metadata cannot be read.
    fn file_size(&self, path: &Path) -> Result<u64, TreeError>;
}

/// `DirSource` over the local filesystem. Symlinks are not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn list_children(&self, dir: &Path) -> Result<Vec<DirEntry>, TreeError> {
        // The ReadDir handle is dropped before returning, so it is never held
        // across recursion into children.
        let read_dir = fs::read_dir(dir).map_err(|e| TreeError::io(dir, e))?;

        let mut out = Vec::new();
        for dent in read_dir {
            let dent = dent.map_err(|e| TreeError::io(dir, e))?;
            let file_type = dent.file_type().map_err(|e| TreeError::io(dent.path(), e))?;
            out.push(DirEntry {
                name: dent.file_name(),
                is_dir: file_type.is_dir(),
            });
        }
        log::debug!("listed {} ({} entries)", dir.display(), out.len());
        Ok(out)
    }

    fn file_size(&self, path: &Path) -> Result<u64, TreeError> {
        let md = fs::symlink_metadata(path).map_err(|e| TreeError::io(path, e))?;
        Ok(md.len())
    }
}

pub fn is_excluded(entry: &DirEntry) -> bool {
    EXCLUDED_NAMES.iter().any(|n| entry.name == *n)
}

/// Children of `dir` that should be drawn, in output order.
///
/// # Errors
/// Propagates the listing error from `source`.
pub fn visible_children<S: DirSource + ?Sized>(
    source: &S,
    dir: &Path,
    mode: RenderMode,
) -> Result<Vec<DirEntry>, TreeError> {
    let mut entries: Vec<DirEntry> = source
        .list_children(dir)?
        .into_iter()
        .filter(|e| !is_excluded(e))
        .filter(|e| e.is_dir || mode.includes_files())
        .collect();
    // OsString ordering compares raw bytes, not locale collation.
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
