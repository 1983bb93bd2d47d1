use netscene_application::use_cases::{GetPiholeStatsUseCase, ScanNetworkUseCase};
use netscene_commands::CommandState;
use netscene_domain::Config;
use netscene_infrastructure::pihole::HttpPiholeClient;
use netscene_infrastructure::system::CommandArpReader;
use std::sync::Arc;

pub struct UseCases {
    pub scan_network: Arc<ScanNetworkUseCase>,
    pub get_pihole_stats: Arc<GetPiholeStatsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let arp_reader = Arc::new(CommandArpReader::from_config(&config.scanner));
        let pihole_client = Arc::new(HttpPiholeClient::new(&config.pihole));

        Self {
            scan_network: Arc::new(ScanNetworkUseCase::new(arp_reader)),
            get_pihole_stats: Arc::new(GetPiholeStatsUseCase::new(pihole_client)),
        }
    }

    pub fn into_state(self) -> CommandState {
        CommandState {
            scan_network: self.scan_network,
            get_pihole_stats: self.get_pihole_stats,
        }
    }
}
