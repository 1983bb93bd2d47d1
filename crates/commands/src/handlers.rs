use crate::{errors::CommandError, state::CommandState};
use netscene_domain::{Device, PiholeStats, StatsRequest};
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "command_scan_network")]
pub async fn scan_network(state: &CommandState) -> Result<Vec<Device>, CommandError> {
    match state.scan_network.execute().await {
        Ok(devices) => {
            debug!(count = devices.len(), "Devices retrieved successfully");
            Ok(devices)
        }
        Err(e) => {
            error!(error = %e, kind = e.kind(), "Failed to scan network");
            Err(e.into())
        }
    }
}

#[instrument(
    skip(state, password),
    fields(authenticated = password.is_some()),
    name = "command_get_pihole_stats"
)]
pub async fn get_pihole_stats(
    state: &CommandState,
    host: String,
    password: Option<String>,
) -> Result<PiholeStats, CommandError> {
    let request = StatsRequest::new(host, password);

    match state.get_pihole_stats.execute(&request).await {
        Ok(stats) => {
            debug!(
                queries = stats.dns_queries_today,
                blocked = stats.ads_blocked_today,
                "Pi-hole stats retrieved successfully"
            );
            Ok(stats)
        }
        Err(e) => {
            error!(error = %e, kind = e.kind(), "Failed to fetch Pi-hole stats");
            Err(e.into())
        }
    }
}
