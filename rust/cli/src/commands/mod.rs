//! Command handler modules for the blackjack CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via the `CliError` enum, mapped to exit codes by `run`

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, TerminalPlayer, handle_play_command};
pub use sim::{MimicDealer, handle_sim_command};
