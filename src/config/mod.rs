pub mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{ColorMode, Config};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/tapefat/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("tapefat"))
}

/// Get the default config file path (~/.config/tapefat/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/tapefat/config.yaml) and falls back to defaults when that
///   file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                log::debug!("No config at {}, using defaults", default_path.display());
                return Ok(Config::default());
            }
            default_path
        }
    };

    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    log::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Write configuration as YAML, replacing the file atomically.
/// Creates the parent directory if needed.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
        }
    }

    let yaml = serde_saphyr::to_string(config).context("Failed to serialize config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::Sex;
    use std::env;

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp_path = env::temp_dir().join("tapefat_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);

        let result = load_config(Some(temp_path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("tapefat_test_roundtrip.yaml");
        let _ = fs::remove_file(&temp_path);

        let config = Config {
            default_sex: Some(Sex::Woman),
            color: ColorMode::Never,
        };
        save_config(&temp_path, &config).unwrap();

        let loaded = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp_path = env::temp_dir().join("tapefat_test_invalid.yaml");
        fs::write(&temp_path, "color: [unterminated\n").unwrap();

        let result = load_config(Some(temp_path.clone()));
        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("invalid YAML"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = env::temp_dir().join("tapefat_test_nested_dir");
        let _ = fs::remove_dir_all(&dir);
        let temp_path = dir.join("config.yaml");

        save_config(&temp_path, &Config::default()).unwrap();
        assert!(temp_path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
