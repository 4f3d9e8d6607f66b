//! search-toolkit command line
//!
//! `search`, `fetch` and `draw` subcommands over the library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use search_toolkit::{
    config::Settings,
    content::PageFetcher,
    diagram::{self, DiagramSpec},
    network::HttpClient,
    Provider, WebSearch,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "search-toolkit", version, about = "Web search, page text and diagram utilities")]
struct Cli {
    /// Path to a settings file
    #[arg(short, long, global = true, env = "SEARCH_TOOLKIT_SETTINGS_PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the configured search provider
    Search {
        query: String,
        /// Override the provider (duckduckgo, google, bing)
        #[arg(short, long)]
        provider: Option<String>,
        #[arg(short = 'n', long)]
        max_results: Option<usize>,
        /// Region, e.g. us-en or wt-wt
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Save the visible text of a web page
    Fetch { url: String, output: PathBuf },
    /// Render a layered-circle diagram into ./diagrams
    Draw {
        name: String,
        #[arg(long)]
        base_circles: Option<usize>,
        #[arg(long)]
        base_color: Option<String>,
        #[arg(long)]
        top_color: Option<String>,
        #[arg(long)]
        line_color: Option<String>,
        #[arg(long)]
        line_width: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(cli.config.as_ref())?;

    match cli.command {
        Command::Search {
            query,
            provider,
            max_results,
            region,
        } => {
            let mut config = settings.search.clone();
            if let Some(provider) = provider {
                config.provider = provider.parse::<Provider>()?;
            }
            if let Some(max_results) = max_results {
                config.max_results = max_results;
            }
            if let Some(region) = region {
                config.region = region;
            }

            let client = HttpClient::with_settings(&settings.outgoing)?;
            let search = WebSearch::with_client(config, client);
            let results = search.search_query(&query).await?;

            for (i, result) in results.iter().enumerate() {
                println!("{}. {}\n   {}\n   {}\n", i + 1, result.title, result.url, result.snippet);
            }
        }
        Command::Fetch { url, output } => {
            let client = HttpClient::with_settings(&settings.outgoing)?;
            let path = PageFetcher::with_client(client)
                .fetch_and_save(&url, &output)
                .await
                .with_context(|| format!("fetching {}", url))?;
            println!("{}", path.display());
        }
        Command::Draw {
            name,
            base_circles,
            base_color,
            top_color,
            line_color,
            line_width,
        } => {
            let mut spec = DiagramSpec::new(name, &settings.diagram);
            if let Some(n) = base_circles {
                spec.base_circle_count = n;
            }
            if let Some(color) = base_color {
                spec.base_circle_color = color;
            }
            if let Some(color) = top_color {
                spec.top_circle_color = color;
            }
            if let Some(color) = line_color {
                spec.line_color = color;
            }
            if let Some(width) = line_width {
                spec.line_width = width;
            }
            let path = diagram::draw(&spec)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Load settings from file or use defaults, then apply the environment
fn load_settings(explicit: Option<&PathBuf>) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => {
            let paths = [
                Some(PathBuf::from("search-toolkit.yml")),
                Some(PathBuf::from("config/search-toolkit.yml")),
                dirs::config_dir().map(|p| p.join("search-toolkit/settings.yml")),
            ];

            match paths.into_iter().flatten().find(|p| p.exists()) {
                Some(path) => {
                    info!("Loading settings from: {}", path.display());
                    Settings::from_file(&path)?
                }
                None => Settings::default(),
            }
        }
    };

    settings.merge_env()?;
    Ok(settings)
}
