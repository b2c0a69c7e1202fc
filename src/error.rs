use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitCheckError {
    #[error("Cannot open info file: {path}")]
    InfoFileMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Incomplete submission info in {path}")]
    IncompleteInfo { path: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid field pattern: {message}")]
    Pattern {
        message: String,
        #[source]
        source: regex::Error,
    },

    #[error("Info file already exists: {path}")]
    TemplateExists { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for SubmitCheckError {
    fn user_message(&self) -> String {
        match self {
            SubmitCheckError::InfoFileMissing { path, source } => {
                format!("Cannot open '{}': {}", path, source)
            }
            SubmitCheckError::IncompleteInfo { path } => incomplete_info_message(path),
            SubmitCheckError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            SubmitCheckError::Pattern { message, .. } => {
                format!("Invalid field pattern: {}", message)
            }
            SubmitCheckError::TemplateExists { path } => {
                format!("Refusing to overwrite existing info file: {}", path)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            SubmitCheckError::InfoFileMissing { .. } => Some(
                "Create the info file in the working directory, or run with --init to generate a template.".to_string()
            ),
            SubmitCheckError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            SubmitCheckError::Pattern { .. } => Some(
                "Check the matriculation_labels entries in your configuration file.".to_string()
            ),
            SubmitCheckError::TemplateExists { .. } => Some(
                "Remove the existing file first if you really want a fresh template.".to_string()
            ),
            _ => None,
        }
    }
}

/// The exact gate message shown when the info file lacks a usable name or
/// matriculation number. The trailing spaces after the field labels are part
/// of the message.
pub fn incomplete_info_message(path: &str) -> String {
    format!(
        "Please add your name and matriculation number to '{}'.\nTry adding:\n   Name: \n   MatrNr: ",
        path
    )
}

impl From<toml::de::Error> for SubmitCheckError {
    fn from(error: toml::de::Error) -> Self {
        SubmitCheckError::Config {
            message: error.to_string(),
        }
    }
}

impl From<regex::Error> for SubmitCheckError {
    fn from(error: regex::Error) -> Self {
        SubmitCheckError::Pattern {
            message: error.to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitCheckError>;
