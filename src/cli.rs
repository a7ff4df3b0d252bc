use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "soulseek-cleaner")]
#[command(about = "Remove incomplete Soulseek downloads", long_about = None)]
pub struct Cli {
    /// Root directory to scan
    pub path: PathBuf,

    /// Glob patterns to consider incomplete (default: *.incomplete *.failed *.tmp *.bak *.part).
    /// A malformed pattern such as an unclosed `[` is rejected rather than
    /// matched literally; write `[[]` for a literal bracket
    #[arg(short = 'e', long = "extensions", num_args = 0.., value_name = "PATTERN")]
    pub extensions: Option<Vec<String>>,

    /// List files without deleting them
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_path_only() {
        let cli = Cli::try_parse_from(["soulseek-cleaner", "/music"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/music"));
        assert!(cli.extensions.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_extensions_and_dry_run() {
        let cli = Cli::try_parse_from([
            "soulseek-cleaner",
            "/music",
            "-e",
            "*.part",
            "*.tmp",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(
            cli.extensions,
            Some(vec!["*.part".to_string(), "*.tmp".to_string()])
        );
        assert!(cli.dry_run);
    }

    #[test]
    fn test_extensions_without_values() {
        let cli = Cli::try_parse_from(["soulseek-cleaner", "/music", "--extensions"]).unwrap();
        assert_eq!(cli.extensions, Some(Vec::new()));
    }

    #[test]
    fn test_extensions_help_explains_bracket_handling() {
        use clap::CommandFactory;

        let help = Cli::command().render_help().to_string();
        assert!(help.contains("unclosed"));
        assert!(help.contains("[[]"));
    }

    #[test]
    fn test_path_is_required() {
        assert!(Cli::try_parse_from(["soulseek-cleaner"]).is_err());
    }
}
