pub mod errors;
pub mod logging;
pub mod pihole;
pub mod root;
pub mod scanner;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use pihole::{PiholeApi, PiholeConfig};
pub use root::{CliOverrides, Config};
pub use scanner::ScannerConfig;
