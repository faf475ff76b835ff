use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commands::{config, query, stats};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "yemenflix")]
#[command(about = "Yemen Flix catalog tools - query, filter, and inspect the content catalog")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a catalog query (filter, sort, paginate)
    #[command(
        long_about = "Filter, sort, and paginate the content catalog. Filter values accept the sentinel 'all' (no constraint); unparseable values behave like 'all'. The rating floor accepts '8.5' or '9+' forms and is inclusive."
    )]
    Query {
        /// Catalog JSON file (defaults to the configured catalog path)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Case-insensitive search over title, description, and genres
        #[arg(long)]
        search: Option<String>,

        /// Content type: movie, series, program, game, application, theater, wrestling, sports, or 'all'
        #[arg(long = "type", value_name = "TYPE")]
        content_type: Option<String>,

        /// Publication status: published, draft, archived, or 'all'
        #[arg(long)]
        status: Option<String>,

        /// Exact release year, or 'all'
        #[arg(long)]
        year: Option<String>,

        /// Quality label the item must carry (e.g. 4K, 1080p), or 'all'
        #[arg(long)]
        quality: Option<String>,

        /// Minimum rating: '8.5', '9+', or 'all'
        #[arg(long)]
        rating: Option<String>,

        /// Genre the item must carry, or 'all'
        #[arg(long)]
        genre: Option<String>,

        /// Sort key: relevance, title, rating, year, views, recency
        #[arg(long, default_value = "relevance")]
        sort: String,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Items per page (defaults to the configured page size)
        #[arg(long, value_name = "N")]
        page_size: Option<u32>,
    },
    /// Show catalog breakdown by type and status
    Stats {
        /// Catalog JSON file (defaults to the configured catalog path)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Query {
            catalog,
            search,
            content_type,
            status,
            year,
            quality,
            rating,
            genre,
            sort,
            page,
            page_size,
        } => {
            let args = query::QueryArgs {
                catalog,
                search,
                content_type,
                status,
                year,
                quality,
                rating,
                genre,
                sort,
                page,
                page_size,
            };
            query::run_query(args, &output).await
        }
        Commands::Stats { catalog } => stats::run_stats(catalog, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output)
        }
    }
}
