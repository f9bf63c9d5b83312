mod cli;
mod config;
mod error;
mod logging;
mod menu;
mod product;
mod session;
mod store;

use std::io;

use clap::Parser;
use cli::Args;
use logging::setup_logging;
use product::ProductRepository;
use session::Session;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.load_config()?;

    // Initialize logging
    setup_logging(&config.log)?;

    info!("Starting keyrepo - in-memory product repository");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        ProductRepository::new(),
        stdin.lock(),
        stdout.lock(),
        config.session,
    );

    session.run()?;

    Ok(())
}
