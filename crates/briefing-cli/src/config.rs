//! Config file discovery for the briefing CLI
//!
//! `--config` wins; otherwise `./config.toml` when present, then
//! `~/.config/briefing/config.toml`.

use std::path::{Path, PathBuf};

use briefing::config::DEFAULT_CONFIG_FILE;

const CONFIG_DIR: &str = "briefing";

/// Per-user config file path, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(DEFAULT_CONFIG_FILE))
}

/// Pick the config file to read. The result may not exist.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_from(explicit, Path::new(DEFAULT_CONFIG_FILE), user_config_path())
}

fn resolve_from(explicit: Option<PathBuf>, local: &Path, user: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if local.is_file() {
        return local.to_path_buf();
    }
    user.filter(|path| path.is_file())
        .unwrap_or_else(|| local.to_path_buf())
}
