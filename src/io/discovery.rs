//! Recursive image file discovery

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{ConversionError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Whether `path` has one of the recognised image extensions
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Collect every image below `root`, sorted by path
///
/// Symlinked directories are not descended into. Symlinked image files are
/// kept.
///
/// # Errors
///
/// Returns [`ConversionError::InputNotFound`] if `root` is not a directory,
/// or a file system error if a directory cannot be listed
pub fn collect_images(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ConversionError::InputNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|source| ConversionError::FileSystem {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            operation: "list directory",
            source: source.into(),
        })?;
        let path = entry.path();
        if !entry.file_type().is_dir() && is_image_file(path) && path.is_file() {
            images.push(entry.into_path());
        }
    }

    images.sort();
    debug!(root = %root.display(), count = images.len(), "Discovered images");
    Ok(images)
}
