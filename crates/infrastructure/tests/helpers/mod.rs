#![allow(unused_imports)]
pub mod pihole_server_mock;

pub use pihole_server_mock::MockPiholeServer;
