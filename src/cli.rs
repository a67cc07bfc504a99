//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; the route table dispatches to the robot token service.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, RobotCommands, TokenCommands};
pub use presentation::{format_token_table, JsonSink, TextTableSink};
pub use route::RunContext;
