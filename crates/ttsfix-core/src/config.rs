use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Published location the repaired files are synced to out-of-band; replacement
/// URLs written into the save file point here.
pub const DEFAULT_FIXED_BASE_URL: &str =
    "https://raw.githubusercontent.com/syllebra/plateau_content/refs/heads/main/fixed/";

/// Directory (relative to the working directory) where repaired copies are written.
pub const DEFAULT_FIXED_DIR: &str = "fixed";

/// Global configuration loaded from `~/.config/ttsfix/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsFixConfig {
    /// Worker threads for concurrent downloads (CLI `-j` overrides this).
    pub jobs: usize,
    /// Where repaired copies of corrupted assets are written.
    #[serde(default = "default_fixed_dir")]
    pub fixed_dir: PathBuf,
    /// Base URL under which the repaired files will be published; the patched
    /// save file references `<fixed_base_url><basename>`.
    #[serde(default = "default_fixed_base_url")]
    pub fixed_base_url: String,
}

fn default_fixed_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FIXED_DIR)
}

fn default_fixed_base_url() -> String {
    DEFAULT_FIXED_BASE_URL.to_string()
}

impl Default for TtsFixConfig {
    fn default() -> Self {
        Self {
            jobs: 4,
            fixed_dir: default_fixed_dir(),
            fixed_base_url: default_fixed_base_url(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ttsfix")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TtsFixConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TtsFixConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TtsFixConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = TtsFixConfig::default();
        assert_eq!(cfg.jobs, 4);
        assert_eq!(cfg.fixed_dir, PathBuf::from("fixed"));
        assert_eq!(cfg.fixed_base_url, DEFAULT_FIXED_BASE_URL);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = TtsFixConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: TtsFixConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.jobs, cfg.jobs);
        assert_eq!(parsed.fixed_dir, cfg.fixed_dir);
        assert_eq!(parsed.fixed_base_url, cfg.fixed_base_url);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            jobs = 8
            fixed_dir = "repaired"
            fixed_base_url = "https://assets.example.com/fixed/"
        "#;
        let cfg: TtsFixConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.jobs, 8);
        assert_eq!(cfg.fixed_dir, PathBuf::from("repaired"));
        assert_eq!(cfg.fixed_base_url, "https://assets.example.com/fixed/");
    }

    #[test]
    fn config_toml_missing_optional_fields() {
        let cfg: TtsFixConfig = toml::from_str("jobs = 2").unwrap();
        assert_eq!(cfg.jobs, 2);
        assert_eq!(cfg.fixed_dir, PathBuf::from("fixed"));
        assert_eq!(cfg.fixed_base_url, DEFAULT_FIXED_BASE_URL);
    }
}
