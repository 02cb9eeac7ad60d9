//! Configuration module

mod site;

pub use site::Config;
pub use site::ConfigError;
pub use site::SiteConfig;
pub use site::CONFIG_FILE;
