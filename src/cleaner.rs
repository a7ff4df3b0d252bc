use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::CleaningConfig;
use crate::error::{Error, Result};
use crate::report::CleaningReport;
use crate::scanner;

/// Find and, unless `config.dry_run` is set, remove partial downloads
/// under `config.root`.
///
/// Fails with [`Error::RootNotFound`] before scanning when the root is not
/// an existing directory, and with [`Error::InvalidPattern`] when a pattern
/// does not compile. A file that cannot be deleted is recorded in the
/// report's `failed` list and never aborts the run.
pub fn cleanup_directory(config: &CleaningConfig) -> Result<CleaningReport> {
    if !config.root.is_dir() {
        return Err(Error::RootNotFound(config.root.clone()));
    }

    info!(
        "Scanning {} for {:?}",
        config.root.display(),
        config.patterns
    );
    let scan_start = Instant::now();
    let targets = scanner::gather_targets(&config.root, &config.patterns)?;
    debug!(
        "Scan completed in {:.2}s, {} targets",
        scan_start.elapsed().as_secs_f64(),
        targets.len()
    );

    if config.dry_run {
        info!(planned = targets.len(), "Dry run, nothing removed");
        return Ok(CleaningReport::dry_run(targets));
    }

    let (removed, failed) = remove_targets(&targets, |path| fs::remove_file(path));
    info!(removed = removed.len(), failed = failed.len(), "Cleanup finished");

    Ok(CleaningReport::completed(targets, removed, failed))
}

/// Delete each target in order with `remove`, partitioning the paths into
/// `(removed, failed)`. No error escapes; each failure is logged and the
/// next target is attempted.
pub fn remove_targets<F>(targets: &[PathBuf], mut remove: F) -> (Vec<PathBuf>, Vec<PathBuf>)
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut removed = Vec::new();
    let mut failed = Vec::new();

    for path in targets {
        match remove(path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                removed.push(path.clone());
            }
            Err(err) => {
                warn!("Failed to remove {}: {}", path.display(), err);
                failed.push(path.clone());
            }
        }
    }

    (removed, failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_failure_does_not_abort_batch() {
        let targets = vec![
            PathBuf::from("a.part"),
            PathBuf::from("b.part"),
            PathBuf::from("c.part"),
        ];
        let mut attempted = Vec::new();

        let (removed, failed) = remove_targets(&targets, |path| {
            attempted.push(path.to_path_buf());
            if path == Path::new("b.part") {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            } else {
                Ok(())
            }
        });

        assert_eq!(attempted, targets);
        assert_eq!(removed, vec![PathBuf::from("a.part"), PathBuf::from("c.part")]);
        assert_eq!(failed, vec![PathBuf::from("b.part")]);
    }

    #[test]
    fn test_no_targets() {
        let (removed, failed) = remove_targets(&[], |_| Ok(()));
        assert!(removed.is_empty());
        assert!(failed.is_empty());
    }
}
