use std::path::PathBuf;

use clap::Parser;

mod cli;
mod commands;
mod data;
mod export;
mod logging;
mod report;
mod store;

use cli::Args;

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tuberplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    let _guard = logging::init_logging(&data_dir, &args.log_level)?;
    tracing::info!(data_dir = %data_dir.display(), "starting tuberplan");

    commands::dispatch(args, &data_dir)
}
