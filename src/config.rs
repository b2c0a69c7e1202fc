use crate::error::{Result, SubmitCheckError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INFO_FILE: &str = "student_info.txt";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub fields: FieldConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub path: PathBuf,
    pub comment_marker: char,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldConfig {
    pub matriculation_labels: Vec<String>,
    pub placeholder: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INFO_FILE),
            comment_marker: '#',
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            matriculation_labels: vec![
                "Matriculation number".to_string(),
                "Matrikelnummer".to_string(),
                "MatrNr".to_string(),
            ],
            placeholder: "???".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SubmitCheckError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SubmitCheckError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| SubmitCheckError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["submitcheck.toml", ".submitcheck.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref info_file) = cli_args.info_file {
            self.input.path = info_file.clone();
        }

        if let Some(ref labels) = cli_args.matriculation_labels {
            self.fields.matriculation_labels = labels
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| SubmitCheckError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| SubmitCheckError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.path.as_os_str().is_empty() {
            return Err(SubmitCheckError::Config {
                message: "Input file path must not be empty".to_string(),
            });
        }

        if self.fields.matriculation_labels.is_empty() {
            return Err(SubmitCheckError::Config {
                message: "At least one matriculation number label must be specified".to_string(),
            });
        }

        if self
            .fields
            .matriculation_labels
            .iter()
            .any(|label| label.trim().is_empty())
        {
            return Err(SubmitCheckError::Config {
                message: "Matriculation number labels must not be blank".to_string(),
            });
        }

        if self.fields.placeholder.is_empty() {
            return Err(SubmitCheckError::Config {
                message: "Placeholder value must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }

    /// Template written by `--init`. Matches the lines the gate message tells
    /// students to add, plus a comment header the scanner ignores.
    pub fn create_info_file_template() -> String {
        "# Fill in your details below. Lines starting with '#' are ignored.\n\
         Name: \n\
         MatrNr: \n"
            .to_string()
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub info_file: Option<PathBuf>,
    pub matriculation_labels: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info_file(mut self, info_file: Option<PathBuf>) -> Self {
        self.info_file = info_file;
        self
    }

    pub fn with_matriculation_labels(mut self, labels: Option<String>) -> Self {
        self.matriculation_labels = labels;
        self
    }
}
