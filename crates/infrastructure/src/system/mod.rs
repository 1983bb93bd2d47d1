pub mod arp_parser;
pub mod arp_reader;

pub use arp_parser::parse_arp_output;
pub use arp_reader::CommandArpReader;
