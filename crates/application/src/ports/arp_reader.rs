use async_trait::async_trait;
use netscene_domain::{Device, DomainError};

/// Devices in first-seen order, at most one per IP.
pub type ArpTable = Vec<Device>;

#[async_trait]
pub trait ArpReader: Send + Sync {
    async fn read_arp_table(&self) -> Result<ArpTable, DomainError>;
}
