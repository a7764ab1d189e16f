use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::*;

use tasklist_cli::config::Config;
use tasklist_cli::{init_db, init_tracing, run_server};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Tasklist - an ordered todo list served over HTTP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema, then serve the HTTP API (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to bind
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,
        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Create or upgrade the database schema and exit
    InitDb {
        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        database: None,
    }) {
        Commands::Serve {
            host,
            port,
            database,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database_path = database;
            }
            run_server(config).await
        }
        Commands::InitDb { database } => {
            if let Some(database) = database {
                config.database_path = database;
            }
            init_db(&config).await
        }
    }
}
