//! CLI argument parsing for the billmock binary.

use clap::Parser;

/// Mock bill.com API server.
#[derive(Parser, Debug)]
#[command(name = "billmock", about = "Mock bill.com API server", version)]
pub struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}
