use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "submitcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate student submission info files")]
#[command(
    long_about = "SubmitCheck reads a student_info.txt file, extracts the student's name \
                       and matriculation number, and confirms which student a submission \
                       belongs to before it is handed on for grading."
)]
#[command(after_help = "EXAMPLES:\n  \
    submitcheck\n  \
    submitcheck path/to/student_info.txt\n  \
    submitcheck --init\n  \
    submitcheck --output-format json --verbose")]
pub struct Cli {
    /// Info file to check (defaults to student_info.txt in the working directory)
    pub info_file: Option<PathBuf>,

    /// Matriculation number labels to recognize (comma-separated)
    #[arg(
        short,
        long,
        help = "Label variants accepted before the matriculation number (e.g. MatrNr,StudentId)"
    )]
    pub labels: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,

    /// Write a template info file and exit
    #[arg(long, help = "Create a template info file for the student to fill in")]
    pub init: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_info_file(self.info_file.clone())
            .with_matriculation_labels(self.labels.clone())
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            info_file: None,
            labels: None,
            config: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            generate_config: false,
            init: false,
        }
    }

    #[test]
    fn test_defaults_need_no_arguments() {
        let cli = Cli::try_parse_from(["submitcheck"]).unwrap();
        assert!(cli.info_file.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_positional_info_file() {
        let cli = Cli::try_parse_from(["submitcheck", "group7/student_info.txt"]).unwrap();
        assert_eq!(
            cli.info_file,
            Some(PathBuf::from("group7/student_info.txt"))
        );
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["submitcheck", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_overrides_carry_cli_values() {
        let mut cli = base_cli();
        cli.info_file = Some(PathBuf::from("info.txt"));
        cli.labels = Some("MatrNr,StudentId".to_string());

        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.info_file, Some(PathBuf::from("info.txt")));
        assert_eq!(
            overrides.matriculation_labels,
            Some("MatrNr,StudentId".to_string())
        );
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let mut cli = base_cli();
        cli.info_file = Some(PathBuf::from("elsewhere.txt"));

        let config = cli.load_config().unwrap();
        assert_eq!(config.input.path, PathBuf::from("elsewhere.txt"));
    }

    #[test]
    fn test_verbosity_level() {
        let mut cli = base_cli();
        cli.verbose = 2;
        assert_eq!(cli.verbosity_level(), 2);
        assert!(cli.is_verbose());

        cli.quiet = true;
        assert_eq!(cli.verbosity_level(), 0);
        assert!(!cli.is_verbose());
    }
}
