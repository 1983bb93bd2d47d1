use netscene_application::use_cases::{GetPiholeStatsUseCase, ScanNetworkUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct CommandState {
    pub scan_network: Arc<ScanNetworkUseCase>,
    pub get_pihole_stats: Arc<GetPiholeStatsUseCase>,
}
