//! encounter - command-line host for encounter balance and token placement
//!
//! Loads a catalog of characters and monsters, then either compares a party
//! against a monster group or lays the monsters out on a scene grid.

mod commands;
mod logger;
mod scene;
mod selection;

use anyhow::{Context, Result};
use bestiary_core::Bestiary;
use clap::{Args, Parser, Subcommand};
use commands::{CatalogListing, ListEntry};
use scene::JsonLinesScene;
use std::path::PathBuf;
use tracing::info;

const BAR_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "encounter")]
#[command(about = "Compare party strength against monsters and place monster tokens")]
#[command(version)]
struct Cli {
    /// Directory of catalog TOML files
    #[arg(short, long, global = true, default_value = "bestiary")]
    bestiary: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the characters and monsters in the bestiary
    List(ListArgs),
    /// Compare the selected party against the selected monsters
    Compare(CompareArgs),
    /// Lay the selected monsters out on the scene grid
    Place(PlaceArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Print the listing as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Character id (repeatable)
    #[arg(short, long = "party", value_name = "ID")]
    party: Vec<String>,

    /// Monster id with optional count (repeatable)
    #[arg(short, long = "monster", value_name = "ID[:COUNT]")]
    monsters: Vec<String>,

    /// Balance constants TOML file
    #[arg(short, long)]
    constants: Option<PathBuf>,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PlaceArgs {
    /// Monster id with optional count (repeatable)
    #[arg(short, long = "monster", value_name = "ID[:COUNT]")]
    monsters: Vec<String>,

    /// Placement config TOML file (layout and image rewrite)
    #[arg(short, long)]
    layout: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let bestiary = Bestiary::load(&cli.bestiary)
        .with_context(|| format!("loading bestiary from {}", cli.bestiary.display()))?;

    match cli.command {
        Command::List(args) => run_list(&bestiary, args),
        Command::Compare(args) => run_compare(&bestiary, args),
        Command::Place(args) => run_place(&bestiary, args),
    }
}

fn run_list(bestiary: &Bestiary, args: ListArgs) -> Result<()> {
    let listing = commands::list(bestiary);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print_listing(&listing);
    }
    Ok(())
}

fn print_listing(listing: &CatalogListing<'_>) {
    println!("Characters:");
    for entry in &listing.characters {
        print_entry(entry);
    }

    let mut folder = None;
    for entry in &listing.monsters {
        if folder != Some(entry.folder) {
            folder = Some(entry.folder);
            println!("Monsters - {}:", entry.folder.unwrap_or("(no folder)"));
        }
        print_entry(entry);
    }
}

fn print_entry(entry: &ListEntry<'_>) {
    println!(
        "  {} ({}): {} HP, {}",
        entry.name, entry.id, entry.hit_points, entry.damage
    );
}

fn run_compare(bestiary: &Bestiary, args: CompareArgs) -> Result<()> {
    let constants = commands::load_constants(args.constants.as_deref())?;

    let report = commands::compare(bestiary, &args.party, &args.monsters, &constants)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let verdict = &report.verdict;
        println!("{}", verdict.summary());
        println!(
            "[{}] {:.0}% / {:.0}%",
            verdict.power_bar(BAR_WIDTH),
            verdict.party_share_percent,
            verdict.opposition_share_percent
        );
    }

    Ok(())
}

fn run_place(bestiary: &Bestiary, args: PlaceArgs) -> Result<()> {
    let config = commands::load_placement_config(args.layout.as_deref())?;

    let stdout = std::io::stdout();
    let mut scene = JsonLinesScene::new(stdout.lock());
    let report = commands::place(bestiary, &args.monsters, &config, &mut scene)?;

    info!(spawned = report.spawned, skipped = report.skipped, "monster tokens placed");
    Ok(())
}
