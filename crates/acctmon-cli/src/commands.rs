use super::args::{Cli, Commands, ProviderCommand};
use super::handlers;
use acctmon_runtime::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(command) = cli.command else {
        // Bare invocation behaves like `status`.
        return handlers::status::handle(&config, cli.format);
    };

    match command {
        Commands::Status => handlers::status::handle(&config, cli.format),

        Commands::Watch => handlers::watch::handle(&config, cli.format),

        Commands::Provider { command } => match command {
            ProviderCommand::List => handlers::provider::handle_list(cli.format),
        },

        Commands::Demo => handlers::demo::handle(&config, cli.format),
    }
}
