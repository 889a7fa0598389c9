// Configuration module for noticeboard
// This module handles loading and parsing configuration from ~/.config/noticeboard/config.toml

mod types;

pub use types::{
    Config, Defaults, DefaultsPatch, InstanceOptions, LIST_ID_SUFFIX, LOADER_ID_SUFFIX,
    WidgetOptions,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/noticeboard/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path, with the same fallbacks as [`load_config`]
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/noticeboard/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("noticeboard")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_is_silent_default() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("absent.toml"));

        assert_eq!(result.config, Config::default());
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let (_dir, path) = write_config("[defaults]\nlist_tag = \"ol\"\n");
        let result = load_config_from(&path);

        assert!(result.warning.is_none());
        assert_eq!(result.config.defaults.list_tag.as_deref(), Some("ol"));
    }

    #[test]
    fn test_unreadable_path_warns() {
        // A directory exists but cannot be read as a file
        let dir = TempDir::new().unwrap();
        let result = load_config_from(dir.path());

        assert_eq!(result.config, Config::default());
        let warning = result.warning.unwrap();
        assert!(warning.starts_with("Failed to read config"), "{}", warning);
    }

    #[test]
    fn test_wrong_value_type_warns() {
        let (_dir, path) = write_config("[defaults]\ncenter_list = \"yes\"\n");
        let result = load_config_from(&path);

        assert_eq!(result.config, Config::default());
        assert!(result.warning.unwrap().starts_with("Invalid config"));
    }

    // Malformed TOML falls back to defaults with a warning
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_malformed_toml_fallback(
            malformed in prop::sample::select(vec![
                "[defaults\nlist_tag = \"ol\"",
                "[defaults]\nlist_tag = ol",
                "[defaults]\n list_tag",
                "defaults]\nlist_tag = \"ol\"",
                "[defaults]\nlist_tag = \"ol",
            ])
        ) {
            let (_dir, path) = write_config(malformed);
            let result = load_config_from(&path);

            prop_assert_eq!(result.config, Config::default());
            prop_assert!(result.warning.is_some());
        }
    }

    #[test]
    fn test_config_path_ends_with_noticeboard_config() {
        let path = get_config_path();
        let path_str = path.to_string_lossy();
        assert!(
            path_str.ends_with("noticeboard/config.toml")
                || path_str.ends_with("noticeboard\\config.toml"),
            "Config path should end with noticeboard/config.toml, got: {}",
            path_str
        );
    }
}
