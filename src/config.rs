use crate::timeline::periods::Locale;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_backend_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Client config stored in ~/.memoria/config.json
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend_base_url")]
    pub backend_base_url: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub last_account_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: default_backend_base_url(),
            locale: Locale::default(),
            last_account_email: None,
        }
    }
}

pub fn memoria_home() -> PathBuf {
    dirs::home_dir()
        .expect("home dir must exist")
        .join(".memoria")
}

pub fn read_config(home: &Path) -> Result<Config> {
    let path = home.join("config.json");
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&text).unwrap_or_default())
}

pub fn write_config(home: &Path, config: &Config) -> Result<()> {
    std::fs::create_dir_all(home)?;
    let tmp = home.join("config.json.tmp");
    std::fs::write(&tmp, serde_json::to_string_pretty(config)?)?;
    std::fs::rename(&tmp, home.join("config.json"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_home() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_read_config_missing_file() {
        let tmp = temp_home();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.backend_base_url, "http://localhost:8000");
        assert_eq!(config.locale, Locale::English);
        assert!(config.last_account_email.is_none());
    }

    #[test]
    fn test_write_and_read_config_round_trip() {
        let tmp = temp_home();
        let home = tmp.path();
        let config = Config {
            backend_base_url: "https://memoria.example".to_string(),
            locale: Locale::Spanish,
            last_account_email: Some("ana@example.com".to_string()),
        };
        write_config(home, &config).unwrap();
        let loaded = read_config(home).unwrap();
        assert_eq!(loaded.backend_base_url, "https://memoria.example");
        assert_eq!(loaded.locale, Locale::Spanish);
        assert_eq!(
            loaded.last_account_email,
            Some("ana@example.com".to_string())
        );
    }

    #[test]
    fn test_read_config_malformed_json_no_crash() {
        let tmp = temp_home();
        let home = tmp.path();
        std::fs::create_dir_all(home).unwrap();
        std::fs::write(home.join("config.json"), b"not valid json }{").unwrap();
        // Must not panic; returns default
        let config = read_config(home).unwrap();
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn test_read_config_partial_fields_fill_defaults() {
        let tmp = temp_home();
        let home = tmp.path();
        std::fs::create_dir_all(home).unwrap();
        std::fs::write(home.join("config.json"), br#"{"locale": "spanish"}"#).unwrap();
        let config = read_config(home).unwrap();
        assert_eq!(config.locale, Locale::Spanish);
        assert_eq!(config.backend_base_url, "http://localhost:8000");
    }
}
