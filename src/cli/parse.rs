//! CLI parse: clap types for `up`. No behavior; definitions only.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// up - manage robots and their tokens
#[derive(Parser, Debug)]
#[command(name = "up")]
#[command(about = "Manage organization robots and their tokens")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Account to operate in (overrides UP_ACCOUNT and the config file)
    #[arg(long, short = 'a', global = true)]
    pub account: Option<String>,

    /// API endpoint (overrides UP_ENDPOINT and the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage robots
    Robot {
        #[command(subcommand)]
        command: RobotCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum RobotCommands {
    /// Manage robot tokens
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// List the tokens of a robot
    List {
        /// Name of robot
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        robot_name: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}
