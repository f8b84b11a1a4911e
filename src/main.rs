// Vendo: a 3x3 vending machine in the terminal

use std::io;

use clap::Parser;
use env_logger::Env;

use vendo::config::{Cli, Config};
use vendo::session::Session;
use vendo::ui::Console;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr and stay quiet unless asked for
    match cli.log_level {
        Some(level) => env_logger::Builder::new().filter_level(level).init(),
        None => env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init(),
    }

    let config = Config::detect(&cli);
    log::debug!("starting with {:?}", config);

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), config);
    let mut session = Session::new(console);

    session.run()?;

    Ok(())
}
