use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::LibraryConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/twinframe/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("twinframe").join("config.ron"))
}

/// Reads and parses a config file.
pub fn load_config_from(path: &Path) -> anyhow::Result<LibraryConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = ron::from_str(&contents)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Loads the config from the default location, falling back to defaults.
///
/// A missing file is normal; an unreadable or malformed one is logged.
pub fn load_config() -> LibraryConfig {
    let Some(path) = config_path() else {
        return LibraryConfig::default();
    };
    if !path.exists() {
        return LibraryConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[twinframe] {e:#}; using defaults");
            LibraryConfig::default()
        }
    }
}

/// Writes the config pretty-printed, creating parent directories.
pub fn save_config_to(path: &Path, config: &LibraryConfig) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty).context("serializing config")?;
    fs::write(path, serialized).with_context(|| format!("writing config {}", path.display()))?;
    Ok(())
}

/// Persists the config to the default location.
pub fn save_config(config: &LibraryConfig) -> anyhow::Result<()> {
    let path = config_path().context("no config directory available")?;
    save_config_to(&path, config)
}
