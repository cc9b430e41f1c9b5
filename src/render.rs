use std::io::Write;
use std::path::Path;

use crate::error::TreeError;
use crate::formatters::tree::{child_prefix, file_label, push_line};
use crate::traversal::{DirSource, FsSource, visible_children};
use crate::types::RenderMode;

/// Renders the tree below `root` from the local filesystem.
///
/// The root itself is not printed, only its descendants.
///
/// # Errors
/// Returns the first listing or metadata error met anywhere in the walk.
pub fn render(root: &Path, mode: RenderMode) -> Result<String, TreeError> {
    render_with(&FsSource, root, mode)
}

/// Renders the tree below `root` using `source` for directory access.
///
/// # Errors
/// Returns the first error reported by `source`; no partial output is kept.
pub fn render_with<S: DirSource + ?Sized>(
    source: &S,
    root: &Path,
    mode: RenderMode,
) -> Result<String, TreeError> {
    let mut out = String::new();
    render_dir(source, root, "", mode, &mut out)?;
    log::info!(
        "rendered {} ({} lines)",
        root.display(),
        out.bytes().filter(|b| *b == b'\n').count()
    );
    Ok(out)
}

/// Renders `root` and writes the result to `writer` in one piece.
///
/// # Errors
/// Returns a render error before anything is written, or the write error.
pub fn write_tree<W: Write + ?Sized>(
    writer: &mut W,
    root: &Path,
    mode: RenderMode,
) -> Result<(), TreeError> {
    let tree = render(root, mode)?;
    writer.write_all(tree.as_bytes()).map_err(TreeError::Write)?;
    writer.flush().map_err(TreeError::Write)
}

fn render_dir<S: DirSource + ?Sized>(
    source: &S,
    dir: &Path,
    prefix: &str,
    mode: RenderMode,
    out: &mut String,
) -> Result<(), TreeError> {
    let entries = visible_children(source, dir, mode)?;
    let last = entries.len().saturating_sub(1);

    for (i, entry) in entries.iter().enumerate() {
        let is_last = i == last;
        let path = dir.join(&entry.name);
        let name = entry.name.to_string_lossy();

        if entry.is_dir {
            push_line(out, prefix, is_last, &name);
            render_dir(source, &path, &child_prefix(prefix, is_last), mode, out)?;
        } else {
            let size = source.file_size(&path)?;
            push_line(out, prefix, is_last, &file_label(&name, size));
        }
    }
    Ok(())
}
