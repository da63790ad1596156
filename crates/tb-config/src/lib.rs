mod config;
mod drag_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use drag_config::DragConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "TB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".taskboard";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_STORAGE_DIRECTORY: &str = "data";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
