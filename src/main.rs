use clap::Parser;
use std::process;
use submitcheck::{
    Cli, OutputFormatter, OutputMode, SubmitCheck, SubmitCheckError, UserFriendlyError,
};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create SubmitCheck instance
    let submitcheck = match SubmitCheck::from_cli(&cli) {
        Ok(submitcheck) => submitcheck,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    if cli.init {
        return handle_init(&submitcheck);
    }

    // Execute the check
    match submitcheck.check_submission() {
        Ok(report) => {
            submitcheck.output_formatter().print_check_report(&report);
            0
        }
        Err(e) => {
            submitcheck.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Map error kinds to process exit codes. Everything except a passed check
/// exits non-zero; downstream tooling keys off the code.
fn exit_code_for(error: &SubmitCheckError) -> i32 {
    match error {
        SubmitCheckError::IncompleteInfo { .. } => 1,
        SubmitCheckError::InfoFileMissing { .. } => 2,
        SubmitCheckError::Config { .. } => 3,
        SubmitCheckError::Pattern { .. } => 4,
        SubmitCheckError::TemplateExists { .. } => 5,
        _ => 1, // General error
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "submitcheck.toml".to_string());

    match SubmitCheck::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  submitcheck --config {}", config_path);
            println!("\nEdit the file to customize the info file path and field labels.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_init(submitcheck: &SubmitCheck) -> i32 {
    let path = &submitcheck.config().input.path;

    match SubmitCheck::generate_info_template(path) {
        Ok(()) => {
            println!("Created template info file: {}", path.display());
            println!("Fill in your name and matriculation number, then run submitcheck again.");
            0
        }
        Err(e) => {
            submitcheck.output_formatter().print_check_failure(&e);
            exit_code_for(&e)
        }
    }
}

fn print_startup_error(error: &SubmitCheckError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
