//! Loading and saving the thinkcap config file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thinkcap_types::{ConfigError, ThinkcapConfig};

use crate::error::{AppError, AppResult};
use crate::modules::logger;

const CONFIG_DIR: &str = "thinkcap";
const CONFIG_FILE: &str = "config.json";
const CONFIG_ENV: &str = "THINKCAP_CONFIG";

/// Resolve the config path: `$THINKCAP_CONFIG`, else `<config dir>/thinkcap/config.json`.
pub fn default_config_path() -> AppResult<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or_else(|| AppError::Config("Failed to resolve user config directory".to_string()))
}

/// Load and validate the config at `path`.
///
/// A missing file yields the default config.
pub fn load_config(path: &Path) -> AppResult<ThinkcapConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logger::log_info(&format!("[Config] {} not found, using defaults", path.display()));
            return Ok(ThinkcapConfig::default());
        },
        Err(e) => return Err(e.into()),
    };
    let config: ThinkcapConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    config.validate()?;

    logger::log_info(&format!(
        "[Config] Loaded {}: {} model(s), {} provider table(s)",
        path.display(),
        config.models.len(),
        config.providers.len()
    ));
    Ok(config)
}

/// Save the config to `path` through a temp file and rename.
pub fn save_config(path: &Path, config: &ThinkcapConfig) -> AppResult<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::from_io_error(&e))?;
        }
    }

    let content = serde_json::to_string_pretty(config)?;
    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        logger::log_warn(&format!("[Config] Rename into {} failed: {}", path.display(), e));
        let _ = fs::remove_file(&temp_path);
        return Err(ConfigError::from_io_error(&e).into());
    }
    Ok(())
}
