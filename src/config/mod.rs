mod env_overrides;
mod loader;
mod types;

pub use env_overrides::apply_env_overrides;
pub use types::{Config, DEFAULT_CONFIG_FILENAME, REQUIRED_OPTIONS, SECTION};
