use std::io;
use std::process;

use log::info;

use club_management::console;
use club_management::console::config::ConsoleConfig;
use club_management::registry::club_registry::ClubRegistry;
use club_management::tools::log_error;

fn main() {
    env_logger::init();

    let config = ConsoleConfig::from_args();
    info!(
        "Starting the club management console with room for {} clubs.",
        config.capacity()
    );
    let mut registry = ClubRegistry::new(*config.capacity());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit_code = console::run(&mut registry, &mut stdin.lock(), &mut stdout.lock())
        .unwrap_or_else(log_error(1));
    process::exit(exit_code);
}
