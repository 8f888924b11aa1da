use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use catalog_core::{load_page, source_for, Controller, PageData, PortalEvent};
use clap::{Args as ClapArgs, Parser, Subcommand};
use shared::domain::{PageKind, SortMode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::{load_settings, OutputFormat, Settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Render the portal's catalog, FAQ and contributors feeds")]
struct Cli {
    /// Config file; missing files are ignored.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// HTTP(S) base URL or directory containing the feed documents.
    #[arg(long)]
    feed: Option<String>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Wrap HTML output in a complete document.
    #[arg(long)]
    standalone: bool,
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter, sort and render the catalog.
    Catalog(CatalogArgs),
    /// List the catalog's main categories in feed order.
    Categories,
    Faq,
    Contributors,
}

#[derive(ClapArgs, Debug, Default)]
struct CatalogArgs {
    /// Main category tab to activate.
    #[arg(long)]
    main: Option<String>,
    #[arg(long = "type")]
    types: Vec<String>,
    #[arg(long = "genre")]
    genres: Vec<String>,
    #[arg(long = "sub")]
    subcategories: Vec<String>,
    /// featured, name, rating, reviews or date.
    #[arg(long)]
    sort: Option<SortMode>,
}

impl Command {
    fn page(&self) -> PageKind {
        match self {
            Self::Catalog(_) | Self::Categories => PageKind::Portal,
            Self::Faq => PageKind::Faq,
            Self::Contributors => PageKind::Contributors,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = load_settings(&cli.config)?;
    if let Some(feed) = &cli.feed {
        settings.feed_base = feed.clone();
    }
    if let Some(format) = cli.format {
        settings.output_format = format;
    }
    info!(feed = %settings.feed_base, page = ?cli.command.page(), "loading page");

    let page = cli.command.page();
    let loaded = match source_for(&settings.feed_base) {
        Ok(source) => load_page(source.as_ref(), page).await,
        Err(err) => Err(err),
    };

    let data = match loaded {
        Ok(data) => data,
        Err(err) => {
            error!(%err, "failed to load page data");
            let body = output::load_error(page, &err, settings.output_format, cli.standalone)?;
            print!("{body}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let body = render_page(cli.command, data, &settings, cli.standalone)?;
    print!("{body}");
    Ok(ExitCode::SUCCESS)
}

fn render_page(
    command: Command,
    data: PageData,
    settings: &Settings,
    standalone: bool,
) -> Result<String> {
    let format = settings.output_format;
    match (command, data) {
        (Command::Catalog(args), PageData::Portal(catalog)) => {
            let records = run_catalog(Controller::new(catalog), args, settings.default_sort);
            output::catalog(&records, format, standalone)
        }
        (Command::Categories, PageData::Portal(catalog)) => {
            Ok(catalog
                .main_categories()
                .into_iter()
                .map(|label| format!("{label}\n"))
                .collect())
        }
        (Command::Faq, PageData::Faq(groups)) => output::faq(&groups, format, standalone),
        (Command::Contributors, PageData::Contributors(people)) => {
            output::contributors(&people, format, standalone)
        }
        (command, _) => anyhow::bail!("feed data does not match command {command:?}"),
    }
}

/// Replays the command-line selection through the controller as page events.
fn run_catalog(
    controller: Controller,
    args: CatalogArgs,
    default_sort: SortMode,
) -> Vec<catalog_core::DisplayRecord> {
    let mut controller = controller.with_sort_mode(args.sort.unwrap_or(default_sort));
    if let Some(main) = args.main {
        controller.handle(PortalEvent::MainCategorySelected(main));
    }
    controller.handle(PortalEvent::FiltersChanged {
        types: args.types,
        genres: args.genres,
        subcategories: args.subcategories,
    })
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
