mod arp_reader;
mod pihole_gateway;

pub use arp_reader::{ArpReader, ArpTable};
pub use pihole_gateway::PiholeGateway;
