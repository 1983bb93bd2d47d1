pub mod get_pihole_stats;

pub use get_pihole_stats::GetPiholeStatsUseCase;
