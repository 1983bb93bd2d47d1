#![allow(unused_imports)]

pub mod mock_ports;

pub use mock_ports::{MockArpReader, MockPiholeGateway};
