//=========================================================================
// Memory Game — Binary Entry Point
//
// Initializes logging, loads configuration and assets, and runs the
// engine on the main thread.
//
// Environment:
// - `RUST_LOG`: log filter (default `info`)
// - `MEMORY_GAME_ASSETS`: asset root directory (default `assets/`)
//
//=========================================================================

use std::env;
use std::process::ExitCode;

use log::{error, info};
use memory_game::prelude::*;

const ASSET_ROOT_VAR: &str = "MEMORY_GAME_ASSETS";

fn run() -> Result<()> {
    let mut config = GameConfig::default();
    if let Some(root) = env::var_os(ASSET_ROOT_VAR) {
        config = config.with_asset_root(root);
    }

    info!("Loading assets from {}", config.asset_root.display());
    let assets = GameAssets::load(&config)?;

    EngineBuilder::new().build(config, assets).run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
