use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use movies::commands::{self, ListOptions};
use movies::{config, AppState, Config, SortOrder};

#[derive(Parser)]
#[command(name = "movies", version = env!("APP_VERSION"))]
#[command(about = "Browse popular and top rated movies from TMDB", long_about = None)]
struct Cli {
    /// TMDB API key (defaults to $TMDB_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Directory for the settings file and poster cache
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List movies using the stored sort order
    List {
        /// Override the stored sort order for this call
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Result page to fetch
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Download the listed posters into the local cache
        #[arg(long)]
        posters: bool,
    },
    /// Show details for one movie
    Details {
        /// TMDB movie id
        movie_id: i64,

        /// Download poster and backdrop into the local cache
        #[arg(long)]
        posters: bool,
    },
    /// Show or change the stored sort order
    Sort {
        /// New sort order; prints the current one when omitted
        #[arg(value_enum)]
        order: Option<SortArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Popular,
    TopRated,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Popular => SortOrder::Popular,
            SortArg::TopRated => SortOrder::TopRated,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_key = cli.api_key.or_else(|| std::env::var("TMDB_API_KEY").ok());
    let needs_api_key = matches!(cli.command, Command::List { .. } | Command::Details { .. });
    let api_key = match api_key {
        Some(key) => key,
        None if needs_api_key => {
            return Err("TMDB API key is required, pass --api-key or set TMDB_API_KEY".into());
        }
        None => String::new(),
    };

    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);
    let state = AppState::new(Config::new(api_key, data_dir)).await?;

    let output = match cli.command {
        Command::List {
            sort,
            page,
            posters,
        } => {
            commands::list(
                &state,
                ListOptions {
                    sort: sort.map(Into::into),
                    page,
                    fetch_posters: posters,
                },
            )
            .await?
        }
        Command::Details { movie_id, posters } => {
            commands::details(&state, movie_id, posters).await?
        }
        Command::Sort { order } => commands::sort_order(&state, order.map(Into::into)).await?,
    };

    println!("{output}");

    Ok(())
}
