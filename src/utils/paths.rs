use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".career_wizard";
const STORAGE_DIR: &str = "storage";

/// Environment variable that relocates every file the wizard writes.
pub const HOME_ENV: &str = "CAREER_WIZARD_HOME";

/// Returns the application data directory, defaulting to `~/.career_wizard`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default directory for the local answer snapshot store.
pub fn storage_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(STORAGE_DIR)
}
