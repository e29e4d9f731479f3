use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable consulted before the config file.
pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key, set via `skycast configure`.
    pub api_key: Option<String>,
}

impl Config {
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// API key to use for queries: the `OPENWEATHER_API_KEY` environment
    /// variable wins over the stored key, matching how the original app was
    /// fed its credential.
    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_api_key(env::var(ENV_API_KEY).ok(), self.api_key.as_deref())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn resolve_api_key(env_key: Option<String>, stored: Option<&str>) -> Result<String> {
    if let Some(key) = env_key.filter(|k| !k.is_empty()) {
        return Ok(key);
    }

    stored.map(str::to_owned).ok_or_else(|| {
        anyhow!(
            "No OpenWeather API key configured.\n\
             Hint: run `skycast configure` and enter your API key, \
             or set the {ENV_API_KEY} environment variable."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_wins_over_stored_key() {
        let key = resolve_api_key(Some("ENV_KEY".into()), Some("STORED_KEY")).unwrap();
        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn empty_env_key_falls_back_to_stored_key() {
        let key = resolve_api_key(Some(String::new()), Some("STORED_KEY")).unwrap();
        assert_eq!(key, "STORED_KEY");
    }

    #[test]
    fn stored_key_used_when_env_absent() {
        let key = resolve_api_key(None, Some("STORED_KEY")).unwrap();
        assert_eq!(key, "STORED_KEY");
    }

    #[test]
    fn errors_when_no_key_anywhere() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
        assert!(err.to_string().contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn set_api_key_stores_the_key() {
        let mut cfg = Config::default();
        assert!(cfg.api_key.is_none());

        cfg.set_api_key("KEY".to_string());
        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
    }
}
