//! Headless Pokedex browser
//!
//! Drives the list and detail controllers exactly as a screen would, and
//! prints what they publish.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pokedex::api::PokeApiClient;
use pokedex::config::{ApiConfig, DEFAULT_API_BASE, PAGE_SIZE};
use pokedex::controller::{PokemonDetailLoader, PokemonListController};
use pokedex::display::{
    dex_number, display_name, height_meters, stat_fraction, weight_kilograms,
};
use pokedex::repository::{PokemonRepository, RemoteRepository};
use pokedex::state::{DetailRecord, ListItemSummary};

const STAT_BAR_WIDTH: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse PokeAPI from the terminal")]
struct Args {
    /// PokeAPI base URL
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = DEFAULT_API_BASE)]
    base_url: String,

    /// Connect timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    connect_timeout: u64,

    /// Whole-request timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List Pokemon, one page of 20 at a time
    List {
        /// Number of pages to load (stops early at the last page)
        #[arg(long, short, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
    /// Show one Pokemon's details
    Show {
        /// National dex id
        id: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = ApiConfig::new(args.base_url).with_timeouts(
        Duration::from_secs(args.connect_timeout),
        Duration::from_secs(args.timeout),
    );
    let client = PokeApiClient::new(&config)?;
    let repository: Arc<dyn PokemonRepository> = Arc::new(RemoteRepository::new(client));

    match args.command {
        Command::List { pages } => run_list(repository, pages).await,
        Command::Show { id } => run_show(repository, id).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_list(repository: Arc<dyn PokemonRepository>, pages: u32) -> anyhow::Result<()> {
    let controller = PokemonListController::new(repository);
    let mut updates = controller.subscribe();
    let mut requested = 1;

    loop {
        let target = requested * PAGE_SIZE;
        let state = updates
            .wait_for(|state| !state.is_loading && (state.offset >= target || state.error.is_some()))
            .await?
            .clone();

        if let Some(error) = state.error {
            anyhow::bail!(error);
        }
        if requested >= pages || state.is_last_page {
            for item in &state.items {
                print_summary(item);
            }
            return Ok(());
        }
        controller.load_next_page();
        requested += 1;
    }
}

async fn run_show(repository: Arc<dyn PokemonRepository>, id: u32) -> anyhow::Result<()> {
    let loader = PokemonDetailLoader::new(repository);
    let mut updates = loader.subscribe();
    loader.load(id);

    let state = updates
        .wait_for(|state| !state.is_loading && (state.record.is_some() || state.error.is_some()))
        .await?
        .clone();

    if let Some(error) = state.error {
        anyhow::bail!(error);
    }
    if let Some(record) = state.record {
        print_record(&record);
    }
    Ok(())
}

fn print_summary(item: &ListItemSummary) {
    println!("{:>6}  {}", dex_number(item.id), display_name(&item.name));
}

fn print_record(record: &DetailRecord) {
    println!("{} {}", dex_number(record.id), display_name(&record.name));
    let types: Vec<String> = record
        .types
        .iter()
        .map(|entry| display_name(&entry.name))
        .collect();
    println!("Types:   {}", types.join(" / "));
    println!("Height:  {}", height_meters(record.height));
    println!("Weight:  {}", weight_kilograms(record.weight));
    if let Some(image) = record.preferred_image() {
        println!("Image:   {image}");
    }

    println!();
    println!("Base stats");
    for stat in &record.stats {
        let filled = (stat_fraction(stat.base_stat) * STAT_BAR_WIDTH as f32).round() as usize;
        println!(
            "  {:<16} {:>3} {}{}",
            display_name(&stat.name),
            stat.base_stat,
            "#".repeat(filled),
            ".".repeat(STAT_BAR_WIDTH - filled)
        );
    }

    println!();
    println!("Abilities");
    for ability in &record.abilities {
        let hidden = if ability.is_hidden { " (hidden)" } else { "" };
        println!("  {}{hidden}", display_name(&ability.name));
    }
}
