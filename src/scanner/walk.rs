use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::pattern::compile_patterns;
use crate::error::Result;

/// Recursively collect the regular files under `root` matching any of
/// `patterns`, each path once, sorted by path.
///
/// Symlinks are not followed and never returned. Directories that cannot
/// be read are logged and skipped; the scan carries on with the rest of
/// the tree. Nothing on disk is modified.
///
/// Returned paths are `root` with any `.` components dropped, joined with
/// the entry's path below it, so `./music` yields `music/a.part`.
pub fn gather_targets(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = compile_patterns(patterns)?;
    if patterns.is_empty() {
        return Ok(Vec::new());
    }

    let base = strip_cur_dir(root);
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();

    let walker = WalkDir::new(root).min_depth(1).follow_links(false);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                let location = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                warn!("Skipping unreadable entry {}: {}", location, err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if patterns.iter().any(|pattern| pattern.matches(relative)) {
            debug!("Matched {}", entry.path().display());
            seen.insert(base.join(relative));
        }
    }

    Ok(seen.into_iter().collect())
}

fn strip_cur_dir(root: &Path) -> PathBuf {
    root.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_cur_dir() {
        assert_eq!(strip_cur_dir(Path::new("./music")), PathBuf::from("music"));
        assert_eq!(strip_cur_dir(Path::new(".")), PathBuf::new());
        assert_eq!(strip_cur_dir(Path::new("/srv/music")), PathBuf::from("/srv/music"));
        assert_eq!(strip_cur_dir(Path::new("../music")), PathBuf::from("../music"));
    }

    #[test]
    fn test_cur_dir_root_is_joined_cleanly() {
        assert_eq!(strip_cur_dir(Path::new(".")).join("a.part"), PathBuf::from("a.part"));
    }
}
