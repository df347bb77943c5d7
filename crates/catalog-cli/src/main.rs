//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together once via `bootstrap`; commands are then
//! routed to handlers, which only talk to the record store.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use catalog_cli::handlers::{add::AddArgs, list::ListArgs, update::UpdateArgs};
use catalog_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::Options = command {
        handlers::options::execute();
        return Ok(());
    }

    let ctx = bootstrap(&CliConfig::from_cli(&cli))?;

    match command {
        Commands::List { search, sort, desc } => {
            let args = ListArgs {
                search,
                sort,
                descending: desc,
            };
            handlers::list::execute(&ctx, &args).await?;
        }
        Commands::Show { id } => {
            handlers::show::execute(&ctx, &id).await?;
        }
        Commands::Add {
            name,
            category,
            price,
            stock,
            description,
            models,
        } => {
            let args = AddArgs {
                name,
                category,
                price,
                stock,
                description,
                models,
            };
            handlers::add::execute(&ctx, args).await?;
        }
        Commands::Update {
            id,
            name,
            category,
            price,
            stock,
            description,
            models,
            clear_models,
        } => {
            let args = UpdateArgs {
                id,
                name,
                category,
                price,
                stock,
                description,
                models,
                clear_models,
            };
            handlers::update::execute(&ctx, args).await?;
        }
        Commands::Remove { id, yes } => {
            handlers::remove::execute(&ctx, &id, yes).await?;
        }
        Commands::Options => handlers::options::execute(),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads CATALOG_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                eprintln!("Error: {cli_err}");
                std::process::exit(cli_err.exit_code());
            }
            None => Err(err),
        },
    }
}
