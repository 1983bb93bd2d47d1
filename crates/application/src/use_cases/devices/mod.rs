pub mod scan_network;

pub use scan_network::ScanNetworkUseCase;
