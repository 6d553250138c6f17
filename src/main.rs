use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use pokedex::catalog::CatalogClient;
use pokedex::cli::{self, Lookup, NO_SELECTION_MESSAGE};
use pokedex::config::Config;
use pokedex::logging::{init_tracing, LogMode};

#[derive(Parser)]
#[command(name = "pokedex", version, about = "Browse a Pokemon catalog from the terminal")]
struct Cli {
    /// Config file (default: ~/.config/pokedex/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override how many entries the list fetches
    #[arg(long, value_name = "N")]
    limit: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive browser (default)
    Browse,
    /// Print the first page of the catalog
    List,
    /// Print the full record of one item
    Show {
        /// Name to look up; only the first is used
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Browse);
    init_tracing(match command {
        Command::Browse => LogMode::Interactive,
        _ => LogMode::Headless,
    });

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.catalog.base_url = base_url;
    }
    if let Some(limit) = cli.limit {
        config.catalog.page_size = limit;
    }
    config.validate()?;

    let client = CatalogClient::new(&config.catalog)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    tracing::info!(base_url = %client.base_url(), "Catalog client ready");

    match command {
        Command::Browse => {
            pokedex::ui::run(&config, client, runtime.handle().clone())?;
        }
        Command::List => {
            let entries = runtime.block_on(cli::list(client, config.catalog.page_size))?;
            print!("{}", cli::format_list(&entries));
        }
        Command::Show { names } => match runtime.block_on(cli::show(client, &names))? {
            Lookup::NoSelection => println!("{NO_SELECTION_MESSAGE}"),
            Lookup::Found(detail) => print!("{}", cli::format_detail(&detail)),
            Lookup::Failed { key, message } => bail!("{key}: {message}"),
        },
    }

    Ok(())
}
