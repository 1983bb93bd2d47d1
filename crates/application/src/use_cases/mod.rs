pub mod devices;
pub mod pihole;

pub use devices::ScanNetworkUseCase;
pub use pihole::GetPiholeStatsUseCase;
