use crate::ports::ArpReader;
use netscene_domain::{Device, DomainError};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: Snapshot the devices currently in the local ARP table
pub struct ScanNetworkUseCase {
    arp_reader: Arc<dyn ArpReader>,
}

impl ScanNetworkUseCase {
    pub fn new(arp_reader: Arc<dyn ArpReader>) -> Self {
        Self { arp_reader }
    }

    pub async fn execute(&self) -> Result<Vec<Device>, DomainError> {
        debug!("Reading ARP table");

        let devices = self.arp_reader.read_arp_table().await?;

        info!(devices = devices.len(), "Network scan complete");
        Ok(devices)
    }
}
