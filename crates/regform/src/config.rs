// File: src/config.rs
// Purpose: Configuration parsing from regform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Page text around the fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

/// Success banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerConfig {
    #[serde(default = "default_message")]
    pub message: String,

    /// How long the banner stays up after a valid submit. The registration
    /// form shows it for exactly 3000 ms; the key exists so tests and demo
    /// sessions can shorten the window, and deployments should leave it unset.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

/// Logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

// Default values
fn default_title() -> String {
    "Tech Conference Registration".to_string()
}

fn default_submit_label() -> String {
    "Daftar Sekarang".to_string()
}

fn default_message() -> String {
    "Registrasi Berhasil!".to_string()
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit_label: default_submit_label(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl BannerConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("regform.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.banner.message, "Registrasi Berhasil!");
        assert_eq!(config.banner.duration(), Duration::from_secs(3));
        assert_eq!(config.form.submit_label, "Daftar Sekarang");
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [banner]
            duration_ms = 500
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.banner.duration_ms, 500);
        assert_eq!(config.banner.message, "Registrasi Berhasil!");
        assert_eq!(config.form.title, "Tech Conference Registration");
    }

    #[test]
    fn test_missing_and_empty_files() {
        let config = Config::load("/nonexistent/regform.toml").unwrap();
        assert_eq!(config.banner.duration(), Duration::from_secs(3));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.form.title, "Tech Conference Registration");
    }

    #[test]
    fn test_banner_section_without_duration_keeps_three_seconds() {
        let config: Config = toml::from_str("[banner]\nmessage = \"Terima kasih\"").unwrap();
        assert_eq!(config.banner.message, "Terima kasih");
        assert_eq!(config.banner.duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[banner]\nduration_ms = \"soon\"").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
