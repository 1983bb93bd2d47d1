use crate::ports::PiholeGateway;
use netscene_domain::{DomainError, PiholeHost, PiholeStats, StatsRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case: Fetch summary statistics from a Pi-hole instance
///
/// One fetch performs at most one authentication call and one stats call.
/// The credential lives only for the duration of `execute`.
pub struct GetPiholeStatsUseCase {
    gateway: Arc<dyn PiholeGateway>,
}

impl GetPiholeStatsUseCase {
    pub fn new(gateway: Arc<dyn PiholeGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, request: &StatsRequest) -> Result<PiholeStats, DomainError> {
        request.validate()?;
        let host = PiholeHost::parse(&request.host)?;

        let credential = match request.password.as_deref() {
            Some(password) => {
                debug!(host = %host, "Authenticating with Pi-hole");
                self.gateway.authenticate(&host, password).await?
            }
            None => None,
        };

        let stats = self
            .gateway
            .fetch_summary(&host, credential.as_ref())
            .await
            .map_err(|e| match e {
                DomainError::Auth(reason) if request.password.is_none() => {
                    warn!(host = %host, "Pi-hole requires a password");
                    DomainError::Auth(format!("credentials required ({})", reason))
                }
                other => other,
            })?;

        stats.validate()?;

        info!(
            host = %host,
            status = %stats.status,
            blocked_today = stats.ads_blocked_today,
            "Pi-hole stats retrieved"
        );
        Ok(stats)
    }
}
