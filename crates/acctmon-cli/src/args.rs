use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "acctmon")]
#[command(about = "Observe account, service and connectivity status for an enterprise messaging endpoint", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the XDG config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the current account status once
    Status,

    /// Repaint the status screen on every observed change of a scripted
    /// provisioning lifecycle
    Watch,

    Provider {
        #[command(subcommand)]
        command: ProviderCommand,
    },

    /// Narrated walkthrough of sign-in, device switch and sign-out
    Demo,
}

#[derive(Subcommand)]
pub enum ProviderCommand {
    /// List the supported identity providers
    List,
}
