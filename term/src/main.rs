//! Terminal UI (TUI) for reading and managing the [JAIL] Тюрьма server feed
//!
//! # Features:
//!
//! - Browse news, updates and custom announcements by tab
//! - Post and delete announcements when the config grants admin
//! - View and edit the link to the server rules
//!
//! Mutations last for the session only. Seed items, the rules link and the
//! admin flag come from a YAML config file created on first launch.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! jailfeed-term --help
//!
//! # launch application
//! jailfeed-term
//!
//! # use a specific config and write debug logs next to it
//! jailfeed-term --config ./feed.yml --debug
//! ```

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use jailfeed_lib::config::{Config, ConfigManager, get_default_config_path};
use std::{
    fs::File,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{
    store::{Store, reducer::StoreReducer, state::State},
    ui::{
        app::{App, CrosstermEvents, create_terminal, restore_terminal},
        colors::Theme,
    },
};

#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;

#[doc(hidden)]
const APP_NAME: &str = "jailfeed-term";
#[doc(hidden)]
const LOG_FILE_NAME: &str = "jailfeed-term.log";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML config file. Defaults to the platform config dir
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme for this session, overriding the config (Blue, Emerald,
    /// Indigo, Red)
    #[arg(short, long)]
    theme: Option<String>,

    /// Write debug logs to a file next to the config file
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[doc(hidden)]
fn initialize_logger(args: &Args, config_path: &Path) -> Result<()> {
    if !args.debug {
        return Ok(());
    }

    // the terminal belongs to the UI, so logs go to a file
    let log_path = config_path.with_file_name(LOG_FILE_NAME);
    let file = File::create(&log_path).wrap_err_with(|| {
        format!("failed to create log file {}", log_path.display())
    })?;

    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        file,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_config_path(args: &Args) -> Result<PathBuf> {
    match args.config.as_ref() {
        Some(path) => Ok(path.clone()),
        None => Ok(get_default_config_path(APP_NAME)?),
    }
}

#[doc(hidden)]
fn is_true_color_supported() -> bool {
    match supports_color::on(supports_color::Stream::Stdout) {
        Some(support) => support.has_16m,
        _ => false,
    }
}

#[doc(hidden)]
fn init(
    args: &Args,
    config: &Config,
    true_color_enabled: bool,
) -> Result<Store> {
    let reducer = StoreReducer::from_config(config)?;

    let theme =
        Theme::from_string(args.theme.as_deref().unwrap_or(&config.theme));

    let state = State::new(
        theme,
        true_color_enabled,
        reducer.label_policy(),
        reducer.view(),
    );

    Ok(Store::new(state, reducer.boxed()))
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let config_path = get_config_path(&args)?;

    initialize_logger(&args, &config_path)?;

    let config_manager = ConfigManager::builder()
        .path(config_path)
        .build()
        .wrap_err("failed to load config")?;

    log::info!("loaded config from {}", config_manager.path().display());

    let store = Rc::new(init(
        &args,
        config_manager.get(),
        is_true_color_supported(),
    )?);

    let terminal = create_terminal()?;
    let app = App::new(terminal, store, Box::new(CrosstermEvents));
    let result = app.launch();

    // restore before color-eyre prints anything
    restore_terminal()?;

    result
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
