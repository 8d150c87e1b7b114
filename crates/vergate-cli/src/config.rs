use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name searched for when no explicit config path is given
pub const CONFIG_FILE_NAME: &str = "vergate.toml";

/// The main vergate configuration file structure (vergate.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VergateConfig {
    /// Settings applied to every check unless overridden
    pub defaults: Defaults,

    /// Version checks, one `[[check]]` table each
    #[serde(rename = "check")]
    pub checks: Vec<CheckConfig>,
}

/// Defaults shared by all checks
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub severity: Severity,
}

/// How an unsatisfied or invalid check is surfaced
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the run
    #[default]
    Error,
    /// Reported, but the run still succeeds
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single `[[check]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    /// Display name (defaults to `check #N`)
    pub name: Option<String>,

    /// Currently deployed version
    pub current_version: String,

    /// Required version, optionally prefixed with an operator
    pub required_version: String,

    /// Overrides `defaults.severity`
    pub severity: Option<Severity>,
}

impl VergateConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VergateConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from an explicit file path
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Find vergate.toml, searching upward from the given directory
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            log::trace!("Looking for {}", config_path.display());

            if config_path.is_file() {
                return Some(config_path);
            }

            // Move to parent directory
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from vergate.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        match Self::find(start_dir) {
            Some(path) => {
                log::debug!("Using config {}", path.display());
                let config = Self::load_file(&path)?;
                Ok(Some((path, config)))
            }
            None => Ok(None),
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<(PathBuf, Self)>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Effective severity for a check
    pub fn severity_of(&self, check: &CheckConfig) -> Severity {
        check.severity.unwrap_or(self.defaults.severity)
    }
}

impl VergateConfig {
    /// Names from `names` that match no check's display name
    pub fn unknown_names<'a>(&self, names: &'a [String]) -> Vec<&'a str> {
        let known: Vec<String> = self
            .checks
            .iter()
            .enumerate()
            .map(|(i, check)| check.display_name(i))
            .collect();

        names
            .iter()
            .filter(|name| !known.contains(name))
            .map(String::as_str)
            .collect()
    }
}

impl CheckConfig {
    /// Name shown in reports; `index` is zero-based
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("check #{}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = VergateConfig::from_toml("").unwrap();
        assert!(config.checks.is_empty());
        assert_eq!(config.defaults.severity, Severity::Error);
    }

    #[test]
    fn test_parse_checks() {
        let toml = r#"
[defaults]
severity = "warning"

[[check]]
name = "terraform"
current_version = "1.5.7"
required_version = "^1.5.0"

[[check]]
current_version = "3.2"
required_version = ">=3.0"
severity = "error"
"#;
        let config = VergateConfig::from_toml(toml).unwrap();
        assert_eq!(config.checks.len(), 2);

        let first = &config.checks[0];
        assert_eq!(first.display_name(0), "terraform");
        assert_eq!(first.current_version, "1.5.7");
        assert_eq!(first.required_version, "^1.5.0");
        assert_eq!(config.severity_of(first), Severity::Warning);

        let second = &config.checks[1];
        assert_eq!(second.display_name(1), "check #2");
        assert_eq!(config.severity_of(second), Severity::Error);
    }

    #[test]
    fn test_unknown_names() {
        let toml = r#"
[[check]]
name = "terraform"
current_version = "1.5.7"
required_version = "^1.5.0"

[[check]]
current_version = "3.2"
required_version = ">=3.0"
"#;
        let config = VergateConfig::from_toml(toml).unwrap();
        let names = vec!["terraform".to_string(), "check #2".to_string(), "typo".to_string()];
        assert_eq!(config.unknown_names(&names), vec!["typo"]);
        assert!(config.unknown_names(&[]).is_empty());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_missing_required_field() {
        let toml = r#"
[[check]]
current_version = "1.0.0"
"#;
        assert!(VergateConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_unknown_severity() {
        let toml = r#"
[defaults]
severity = "fatal"
"#;
        assert!(VergateConfig::from_toml(toml).is_err());
    }
}
