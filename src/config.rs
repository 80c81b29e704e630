//! Configuration and CLI argument handling

use clap::Parser;

use crate::render::frame::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "focus-timer")]
#[command(about = "A countdown overlay that turns remaining focus time into color")]
#[command(version)]
pub struct Config {
    /// Port for the control API
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Default overlay width for rendered frames
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Default overlay height for rendered frames
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
