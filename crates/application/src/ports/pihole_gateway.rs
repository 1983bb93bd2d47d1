use async_trait::async_trait;
use netscene_domain::{DomainError, PiholeHost, PiholeStats, SessionCredential};

#[async_trait]
pub trait PiholeGateway: Send + Sync {
    /// Exchange a password for a credential usable by `fetch_summary`.
    ///
    /// `Ok(None)` means the instance accepted the request without needing
    /// a credential. A rejected password is `DomainError::Auth`.
    async fn authenticate(
        &self,
        host: &PiholeHost,
        password: &str,
    ) -> Result<Option<SessionCredential>, DomainError>;

    async fn fetch_summary(
        &self,
        host: &PiholeHost,
        credential: Option<&SessionCredential>,
    ) -> Result<PiholeStats, DomainError>;
}
