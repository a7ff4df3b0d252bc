use std::fmt;
use std::path::PathBuf;

/// Outcome of a single cleanup run.
///
/// `targets` is always the full scan result. On a dry run `removed` and
/// `failed` are empty; otherwise they partition `targets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningReport {
    targets: Vec<PathBuf>,
    removed: Vec<PathBuf>,
    failed: Vec<PathBuf>,
    dry_run: bool,
}

impl CleaningReport {
    pub(crate) fn dry_run(targets: Vec<PathBuf>) -> Self {
        Self {
            targets,
            removed: Vec::new(),
            failed: Vec::new(),
            dry_run: true,
        }
    }

    pub(crate) fn completed(
        targets: Vec<PathBuf>,
        removed: Vec<PathBuf>,
        failed: Vec<PathBuf>,
    ) -> Self {
        Self {
            targets,
            removed,
            failed,
            dry_run: false,
        }
    }

    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    pub fn removed(&self) -> &[PathBuf] {
        &self.removed
    }

    pub fn failed(&self) -> &[PathBuf] {
        &self.failed
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn planned_count(&self) -> usize {
        self.targets.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

impl fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would remove" } else { "Removed" };
        write!(f, "{} {} file(s)", verb, self.planned_count())?;
        write!(f, "\nRemoved: {}", self.removed_count())?;
        write!(f, "\nFailed: {}", self.failed_count())?;

        if !self.targets.is_empty() {
            write!(f, "\n\nTargets:")?;
            for path in &self.targets {
                write!(f, "\n- {}", path.display())?;
            }
        }

        Ok(())
    }
}

pub fn format_report(report: &CleaningReport) -> String {
    report.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_report_text() {
        let report = CleaningReport::dry_run(vec![
            PathBuf::from("music/a.part"),
            PathBuf::from("music/b.tmp"),
        ]);

        assert_eq!(
            format_report(&report),
            "Would remove 2 file(s)\nRemoved: 0\nFailed: 0\n\nTargets:\n- music/a.part\n- music/b.tmp"
        );
    }

    #[test]
    fn test_completed_report_text() {
        let report = CleaningReport::completed(
            vec![PathBuf::from("a.part"), PathBuf::from("b.tmp")],
            vec![PathBuf::from("a.part")],
            vec![PathBuf::from("b.tmp")],
        );

        assert_eq!(report.planned_count(), 2);
        assert_eq!(report.removed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(
            report.to_string(),
            "Removed 2 file(s)\nRemoved: 1\nFailed: 1\n\nTargets:\n- a.part\n- b.tmp"
        );
    }

    #[test]
    fn test_empty_report_omits_targets_block() {
        let report = CleaningReport::completed(Vec::new(), Vec::new(), Vec::new());
        assert_eq!(report.to_string(), "Removed 0 file(s)\nRemoved: 0\nFailed: 0");
    }
}
