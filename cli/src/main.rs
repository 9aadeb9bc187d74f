//! CLI for listing the [JAIL] Тюрьма server feed
//!
//! Reads the same YAML config as the terminal UI and prints the items visible
//! under a filter, or the rules link for the `rules` filter.
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! jailfeed-cli --help
//!
//! # list every item
//! jailfeed-cli
//!
//! # only news, as json
//! jailfeed-cli --filter news --json
//! ```
use clap::Parser;
use color_eyre::eyre::{Context, Result};
use itertools::Itertools;
use jailfeed_lib::{
    config::{ConfigManager, get_default_config_path},
    filter::Filter,
    item::ContentItem,
    store::FeedStore,
};
use log::*;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

#[doc(hidden)]
const APP_NAME: &str = "jailfeed-term";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// CLI for listing the server news and announcement feed
struct Args {
    /// Path to the YAML config file. Defaults to the one the terminal UI uses
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Which items to list: home, news, updates or rules
    #[arg(short, long, default_value_t = Filter::Home)]
    filter: Filter,

    /// Output in json instead of table text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Only print final output nothing else
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Prints debug logs including those from jailfeed-lib
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.quiet {
        simplelog::LevelFilter::Error
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn print_args(args: &Args, config_path: &Path) {
    info!("configuration:");
    info!("config: {}", config_path.display());
    info!("filter: {}", args.filter);
    info!("json:   {}", args.json);
    info!("quiet:  {}", args.quiet);
}

#[doc(hidden)]
fn load_store(config_path: PathBuf, filter: Filter) -> Result<FeedStore> {
    let manager = ConfigManager::builder()
        .path(config_path)
        .build()
        .wrap_err("failed to load config")?;

    let mut store = manager.get().store_builder().build()?;
    store.set_active_filter(filter);
    Ok(store)
}

#[doc(hidden)]
fn summarize(items: &[&ContentItem]) -> String {
    items
        .iter()
        .counts_by(|i| i.kind.label().to_string())
        .into_iter()
        .sorted()
        .map(|(label, count)| format!("{label}: {count}"))
        .join(", ")
}

#[doc(hidden)]
fn write_items<W: Write>(
    out: &mut W,
    args: &Args,
    items: &[&ContentItem],
) -> Result<()> {
    if args.json {
        let j: String = serde_json::to_string(items)?;
        writeln!(out, "{}", j)?;
        return Ok(());
    }

    let mut table = prettytable::Table::new();

    table.add_row(prettytable::row!["ID", "DATE", "TYPE", "TITLE", "CONTENT"]);

    for item in items {
        table.add_row(prettytable::row![
            item.id,
            item.date,
            item.kind.label(),
            item.title,
            item.content
        ]);
    }

    table.print(out)?;

    Ok(())
}

#[doc(hidden)]
fn write_rules_link<W: Write>(
    out: &mut W,
    args: &Args,
    link: &str,
) -> Result<()> {
    if args.json {
        let j = serde_json::json!({ "rulesLink": link });
        writeln!(out, "{}", j)?;
    } else {
        writeln!(out, "{}", link)?;
    }
    Ok(())
}

#[doc(hidden)]
fn run<W: Write>(out: &mut W, args: &Args, store: &FeedStore) -> Result<()> {
    if !store.active_filter().shows_items() {
        return write_rules_link(out, args, store.rules_link());
    }

    let items = store.visible();

    info!(
        "{} item(s) under {}: {}",
        items.len(),
        store.active_filter(),
        summarize(&items)
    );

    write_items(out, args, &items)
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let config_path = match args.config.as_ref() {
        Some(path) => path.clone(),
        None => get_default_config_path(APP_NAME)?,
    };

    print_args(&args, &config_path);

    let store = load_store(config_path, args.filter)?;

    run(&mut io::stdout().lock(), &args, &store)
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
