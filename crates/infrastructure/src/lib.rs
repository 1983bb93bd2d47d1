pub mod pihole;
pub mod system;
