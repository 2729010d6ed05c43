mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => {}
        Some("--help" | "-h" | "help") => {
            print_usage();
            return Ok(());
        }
        Some("--version" | "-V" | "version") => {
            println!("budget-dash {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown argument: {other}");
        }
    }

    logging::init()?;
    run::as_tui(models::Month::current())
}

fn print_usage() {
    println!("Budget Dash - monthly budget dashboard for the terminal");
    println!();
    println!("Usage: budget-dash [--help | --version]");
    println!();
    println!("Budget data lives only for the running session and is discarded on exit.");
    println!();
    println!("Environment:");
    println!("  {:<24}tracing filter, e.g. debug (unset: no log file)", logging::LOG_ENV);
}
