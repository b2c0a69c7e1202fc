pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, FieldConfig, InputConfig};
pub use error::{Result, SubmitCheckError, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    CheckReport, FieldValue, InfoExtractor, ScanOutcome, ScanStatistics, StudentRecord,
};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface for SubmitCheck functionality
pub struct SubmitCheck {
    config: Config,
    output_formatter: OutputFormatter,
}

impl SubmitCheck {
    /// Create a new SubmitCheck instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create SubmitCheck instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run the full check: open the info file, scan it for the student's
    /// name and matriculation number, and validate both fields.
    pub fn check_submission(&self) -> Result<CheckReport> {
        let path = &self.config.input.path;

        self.output_formatter.start_operation("Checking submission info");
        self.output_formatter
            .info(&format!("Reading '{}'", path.display()));

        let extractor = InfoExtractor::from_config(&self.config)?;
        let outcome = extractor.scan_file(path)?;

        self.output_formatter
            .debug(&outcome.statistics.display_summary());

        match (
            outcome.record.name(),
            outcome.record.matriculation_number(),
        ) {
            (Some(name), Some(matriculation_number)) => {
                self.output_formatter
                    .success(&format!("'{}' passed validation", path.display()));

                Ok(CheckReport::new(
                    path.clone(),
                    name.to_string(),
                    matriculation_number.to_string(),
                    &outcome.statistics,
                ))
            }
            _ => Err(SubmitCheckError::IncompleteInfo {
                path: path.display().to_string(),
            }),
        }
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(SubmitCheckError::Io)?;
        Ok(())
    }

    /// Write a template info file for the student to fill in. Refuses to
    /// overwrite an existing file so a filled-in one is never lost.
    pub fn generate_info_template<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let path = output_path.as_ref();

        if path.exists() {
            return Err(SubmitCheckError::TemplateExists {
                path: path.display().to_string(),
            });
        }

        std::fs::write(path, Config::create_info_file_template()).map_err(SubmitCheckError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &SubmitCheckError) {
        self.output_formatter.print_check_failure(error);
    }
}

/// Convenience function to check an info file with minimal setup
pub fn check_info_file<P: AsRef<Path>>(path: P) -> Result<CheckReport> {
    let mut config = Config::default();
    config.input.path = path.as_ref().to_path_buf();

    let submitcheck = SubmitCheck::new(config, OutputMode::Plain, 0, true);
    submitcheck.check_submission()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
