//! Configuration management for the Olympia CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Defaults
//! - Config files (.olympia/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! The configuration is workspace-centric; catalog overrides and the config
//! file live under `.olympia/`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Exam year used in exam prompts when nothing overrides it.
pub const DEFAULT_EXAM_YEAR: u16 = 2024;

/// Name of the per-workspace state directory.
pub const STATE_DIR: &str = ".olympia";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .olympia/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Prompt rendering settings
    pub prompts: PromptSettings,
}

/// Prompt rendering settings.
///
/// Templates use Handlebars syntax; `None` means the built-in template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSettings {
    /// Year substituted into exam prompts
    pub year: u16,

    /// Custom exam prompt template
    #[serde(rename = "examTemplate", skip_serializing_if = "Option::is_none")]
    pub exam_template: Option<String>,

    /// Custom problem prompt template
    #[serde(rename = "problemTemplate", skip_serializing_if = "Option::is_none")]
    pub problem_template: Option<String>,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            year: DEFAULT_EXAM_YEAR,
            exam_template: None,
            problem_template: None,
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    workspace: Option<WorkspaceConfig>,
    logging: Option<LoggingConfig>,
    prompts: Option<PromptsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PromptsConfig {
    year: Option<u16>,
    #[serde(rename = "examTemplate")]
    exam_template: Option<String>,
    #[serde(rename = "problemTemplate")]
    problem_template: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
            prompts: PromptSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the YAML config file and
    /// environment variables, in that order of precedence (last wins).
    ///
    /// Environment variables:
    /// - `OLYMPIA_WORKSPACE`: Override workspace path
    /// - `OLYMPIA_CONFIG`: Path to config file
    /// - `OLYMPIA_YEAR`: Exam year used in exam prompts
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use olympia_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(None, None)
    }

    /// Like [`AppConfig::load`], but an explicit workspace or config file
    /// (e.g. from CLI flags) replaces the environment variable so the right
    /// config file gets merged.
    pub fn load_with(
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> AppResult<Self> {
        let mut config = Self::default();

        let workspace =
            workspace.or_else(|| std::env::var_os("OLYMPIA_WORKSPACE").map(PathBuf::from));
        if let Some(workspace) = workspace {
            config.workspace = workspace;
        }

        config.config_file =
            config_file.or_else(|| std::env::var_os("OLYMPIA_CONFIG").map(PathBuf::from));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        // A named config file must exist; the workspace default is optional
        match config.config_file.clone() {
            Some(path) if !path.exists() => {
                return Err(AppError::Config(format!(
                    "Config file does not exist: {:?}",
                    path
                )));
            }
            Some(path) => config = config.merge_yaml(&path)?,
            None => {
                let default_path = config.state_dir().join("config.yaml");
                if default_path.exists() {
                    config = config.merge_yaml(&default_path)?;
                }
            }
        }

        if let Ok(year) = std::env::var("OLYMPIA_YEAR") {
            config.prompts.year = parse_year(&year)?;
        }

        config.log_level = std::env::var("RUST_LOG").ok().or(config.log_level);

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    pub fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(ws) = config_file.workspace {
            if let Some(path) = ws.path {
                result.workspace = PathBuf::from(path);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(prompts) = config_file.prompts {
            if let Some(year) = prompts.year {
                result.prompts.year = year;
            }
            if prompts.exam_template.is_some() {
                result.prompts.exam_template = prompts.exam_template;
            }
            if prompts.problem_template.is_some() {
                result.prompts.problem_template = prompts.problem_template;
            }
        }

        tracing::debug!("Merged config file {:?}", path);

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over the config file and
    /// environment variables.
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
        year: Option<u16>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(year) = year {
            self.prompts.year = year;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .olympia directory.
    pub fn state_dir(&self) -> PathBuf {
        self.workspace.join(STATE_DIR)
    }

    /// Get the path to the catalog override directory.
    pub fn catalogs_dir(&self) -> PathBuf {
        self.state_dir().join("catalogs")
    }
}

fn parse_year(raw: &str) -> AppResult<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid OLYMPIA_YEAR {:?}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn base_config(dir: &Path) -> AppConfig {
        AppConfig {
            workspace: dir.to_path_buf(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.prompts.year, 2024);
        assert!(config.prompts.exam_template.is_none());
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_state_dirs() {
        let config = AppConfig::default();
        assert!(config.state_dir().ends_with(".olympia"));
        assert!(config.catalogs_dir().ends_with(".olympia/catalogs"));
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(None, None, Some(2025), None, true, false);

        assert_eq!(overridden.prompts.year, 2025);
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_verbose_keeps_explicit_level() {
        let config = AppConfig::default();
        let overridden =
            config.with_overrides(None, None, None, Some("trace".to_string()), true, true);

        assert_eq!(overridden.log_level, Some("trace".to_string()));
        assert!(overridden.no_color);
    }

    #[test]
    fn test_merge_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"
logging:
  level: debug
  color: false
prompts:
  year: 2023
  problemTemplate: "Bài tập {{topic}}"
"#,
        )
        .unwrap();

        let merged = base_config(temp_dir.path()).merge_yaml(&path).unwrap();
        assert_eq!(merged.log_level, Some("debug".to_string()));
        assert!(merged.no_color);
        assert_eq!(merged.prompts.year, 2023);
        assert_eq!(
            merged.prompts.problem_template,
            Some("Bài tập {{topic}}".to_string())
        );
        assert!(merged.prompts.exam_template.is_none());
    }

    #[test]
    fn test_merge_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "prompts: [unclosed").unwrap();

        let result = base_config(temp_dir.path()).merge_yaml(&path);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_named_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.yaml");

        let result = AppConfig::load_with(Some(temp_dir.path().to_path_buf()), Some(missing));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_with_named_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "prompts:\n  examTemplate: \"Đề {{topic}}\"\n").unwrap();

        let config =
            AppConfig::load_with(Some(temp_dir.path().to_path_buf()), Some(path)).unwrap();
        assert_eq!(config.prompts.exam_template, Some("Đề {{topic}}".to_string()));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(" 2022 ").unwrap(), 2022);
        assert!(parse_year("next year").is_err());
    }
}
