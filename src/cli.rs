use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wxjson",
    version,
    about = "Exchange weather data as JSON between a tiny server and client"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve weather reports until interrupted
    Server {
        /// Address to bind, overrides the configured one
        #[arg(long)]
        addr: Option<String>,
    },
    /// Post a location to the server and print the response
    Client {
        /// Server URL, overrides the configured one
        #[arg(long)]
        url: Option<String>,
    },
    /// Run server and client once in this process
    Demo,
}
