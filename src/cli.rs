//! CLI argument parsing and startup helpers.

use crate::ServerConfig;
use clap::Parser;

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "namecheck",
    about = "Username and domain availability checker"
)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "7310")]
    pub port: u16,

    /// Disable the simulated 50-200 ms lookup latency
    #[arg(long)]
    pub no_latency: bool,

    /// Log output format
    #[arg(short, long, default_value = "pretty")]
    pub log_format: LogFormat,
}

/// Initialize logging based on the specified format.
pub fn init_logging(format: &LogFormat) {
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt::init(),
        LogFormat::Json => tracing_subscriber::fmt().json().init(),
        LogFormat::Compact => tracing_subscriber::fmt().compact().init(),
    }
}

/// Build ServerConfig from parsed arguments.
pub fn build_config(args: &Args) -> ServerConfig {
    ServerConfig {
        simulate_latency: !args.no_latency,
    }
}
