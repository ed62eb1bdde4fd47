pub mod settings;

pub use settings::{ApiSettings, AppConfig, DEFAULT_BASE_URL, ENV_BASE_URL};
