pub mod dispatcher;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod state;

pub use dispatcher::{CommandDispatcher, COMMANDS, GET_PIHOLE_STATS, SCAN_NETWORK};
pub use errors::CommandError;
pub use state::CommandState;
