pub mod cli;
pub mod paths;
mod settings;

pub use cli::Cli;
pub use settings::{Config, ConfigError, TomlConfig, DEFAULT_LOG_LEVEL, DEFAULT_TITLE};
