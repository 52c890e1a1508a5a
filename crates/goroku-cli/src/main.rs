mod commands;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goroku_api::types::QuoteFilter;
use goroku_api::QuoteApiClient;
use goroku_core::config::AppConfig;
use goroku_core::error::GorokuError;

#[derive(Parser)]
#[command(name = "goroku", about = "Browse an anime quote catalog", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse anime series
    Anime {
        #[command(subcommand)]
        command: AnimeCommand,
    },
    /// List characters, optionally for one anime
    Characters {
        #[arg(long)]
        anime: Option<String>,
    },
    /// Show one character and their quotes
    Character { slug: String },
    /// List quotes with server-side filters
    Quotes {
        #[arg(long)]
        anime: Option<String>,
        #[arg(long)]
        character_slug: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        /// Exact character name, filtered client-side over the fetched list
        #[arg(long)]
        character: Option<String>,
    },
    /// Full-text search; accepts raw text or a `?q=` deep link
    Search { query: String },
    /// Featured quotes; --watch drives the rotating carousel until Ctrl-C
    Featured {
        #[arg(long)]
        watch: bool,
    },
    /// Manage the persisted favorites set
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Subcommand)]
enum AnimeCommand {
    /// List every series in the catalog
    List,
    /// Show one series with its characters and quotes
    Show { slug: String },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// Show saved quotes, reconciled against the catalog
    List,
    /// Save a quote id
    Add { id: String },
    /// Remove a quote id
    Remove { id: String },
}

#[tokio::main]
async fn main() -> Result<(), GorokuError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("goroku=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let client = Arc::new(QuoteApiClient::new(config.base_url()?));

    match cli.command {
        Command::Anime { command } => match command {
            AnimeCommand::List => commands::anime_list(&client).await,
            AnimeCommand::Show { slug } => commands::anime_show(&client, &slug).await,
        },
        Command::Characters { anime } => commands::characters(&client, anime.as_deref()).await,
        Command::Character { slug } => commands::character_show(&client, &slug).await,
        Command::Quotes {
            anime,
            character_slug,
            category,
            limit,
            character,
        } => {
            let filter = QuoteFilter {
                anime_slug: anime,
                character_slug,
                category,
                limit,
            };
            commands::quotes(&client, filter, character.as_deref()).await;
        }
        Command::Search { query } => commands::search(client, &query, &config).await,
        Command::Featured { watch } => commands::featured(&client, watch).await,
        Command::Favorites { command } => match command {
            FavoritesCommand::List => commands::favorites_list(client).await,
            FavoritesCommand::Add { id } => commands::favorites_add(&id),
            FavoritesCommand::Remove { id } => commands::favorites_remove(client, &id).await,
        },
    }

    Ok(())
}
