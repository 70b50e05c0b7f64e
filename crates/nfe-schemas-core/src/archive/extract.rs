//! Extract a ZIP held in memory into a directory.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use super::ExtractError;

/// Paths written by one extraction, relative to the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
}

/// Unpacks every entry of the ZIP in `data` under `dest`, keeping the
/// relative paths the archive defines and overwriting existing files.
///
/// All entry names are checked before anything is written: an archive with
/// an entry that would land outside `dest` writes nothing.
pub fn extract_zip(data: &[u8], dest: &Path) -> Result<ExtractReport, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;

    let mut plan: Vec<(PathBuf, bool)> = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        let relative = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => return Err(ExtractError::UnsafePath(entry.name().to_string())),
        };
        plan.push((relative, entry.is_dir()));
    }

    let mut report = ExtractReport::default();
    for (i, (relative, is_dir)) in plan.into_iter().enumerate() {
        let target = dest.join(&relative);
        if is_dir {
            create_dir_all(&target)?;
            report.directories.push(relative);
            continue;
        }
        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }

        let mut entry = archive.by_index(i)?;
        let mut out = File::create(&target).map_err(|source| ExtractError::Io {
            path: target.clone(),
            source,
        })?;
        io::copy(&mut entry, &mut out).map_err(|source| ExtractError::Io {
            path: target.clone(),
            source,
        })?;
        tracing::trace!(path = %relative.display(), size = entry.size(), "extracted");
        report.files.push(relative);
    }

    Ok(report)
}

fn create_dir_all(path: &Path) -> Result<(), ExtractError> {
    fs::create_dir_all(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}
