use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ChannelBumpError, Result};
use crate::updater::UpdateCommand;

/// File name looked up in the project root and the user config directory.
pub const CONFIG_FILE_NAME: &str = "channel-bump.toml";

/// Represents the complete configuration for channel-bump.
///
/// Names the manifest holding the source-of-truth version and the external
/// commands that write a new version back into the project's manifests.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_update_commands")]
    pub update: Vec<UpdateCommand>,
}

/// Returns the default manifest location, relative to the project root.
fn default_manifest() -> PathBuf {
    PathBuf::from("vscode-gn/package.json")
}

/// Returns the default update commands: the Cargo manifest first, then the extension's package.json.
fn default_update_commands() -> Vec<UpdateCommand> {
    vec![
        UpdateCommand::new("cargo", ["set-version", "{version}"]),
        UpdateCommand::new("npm", ["version", "{version}"]).in_dir("vscode-gn"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            update: default_update_commands(),
        }
    }
}

impl Config {
    /// Resolves the manifest path against the project root.
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter, resolved against `root` when relative
/// 2. `channel-bump.toml` in the project root
/// 3. `channel-bump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `root` - Project root directory
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        root.join(path)
    } else if root.join(CONFIG_FILE_NAME).exists() {
        root.join(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(CONFIG_FILE_NAME);
        if user_config.exists() {
            user_config
        } else {
            debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(config = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        ChannelBumpError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| ChannelBumpError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.manifest, PathBuf::from("vscode-gn/package.json"));
        assert_eq!(config.update.len(), 2);
        assert_eq!(config.update[0].program, "cargo");
        assert_eq!(config.update[0].args, vec!["set-version", "{version}"]);
        assert_eq!(config.update[0].cwd, None);
        assert_eq!(config.update[1].program, "npm");
        assert_eq!(config.update[1].cwd, Some(PathBuf::from("vscode-gn")));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(r#"manifest = "package.json""#).unwrap();
        assert_eq!(config.manifest, PathBuf::from("package.json"));
        assert_eq!(config.update, Config::default().update);
    }

    #[test]
    fn test_parse_update_commands() {
        let config = parse_config(
            r#"
[[update]]
program = "npm"
args = ["version", "{version}", "--no-git-tag-version"]
cwd = "editors/code"
"#,
        )
        .unwrap();
        assert_eq!(config.update.len(), 1);
        assert_eq!(config.update[0].args[2], "--no-git-tag-version");
        assert_eq!(config.update[0].cwd, Some(PathBuf::from("editors/code")));
    }

    #[test]
    fn test_parse_empty_update_list() {
        let config = parse_config("update = []").unwrap();
        assert!(config.update.is_empty());
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("manifest = [").unwrap_err();
        assert!(matches!(err, ChannelBumpError::Toml(_)));
    }

    #[test]
    fn test_relative_config_path_is_relative_to_root() {
        let root = tempfile::TempDir::new().unwrap();
        fs::write(root.path().join("custom.toml"), "manifest = \"custom.json\"\n").unwrap();

        let config = load_config(Some(Path::new("custom.toml")), root.path()).unwrap();
        assert_eq!(config.manifest, PathBuf::from("custom.json"));
    }

    #[test]
    fn test_manifest_path_is_relative_to_root() {
        let config = Config::default();
        assert_eq!(
            config.manifest_path(Path::new("/src/gn")),
            PathBuf::from("/src/gn/vscode-gn/package.json")
        );
    }
}
