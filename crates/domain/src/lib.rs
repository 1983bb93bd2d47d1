//! NetScene Domain Layer
pub mod config;
pub mod device;
pub mod errors;
pub mod pihole;

pub use config::{CliOverrides, Config, ConfigError, PiholeApi};
pub use device::{Device, MacAddress};
pub use errors::DomainError;
pub use pihole::{PiholeHost, PiholeStats, SessionCredential, StatsRequest};
