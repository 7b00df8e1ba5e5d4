// CLI binary entry point for opusogg

use clap::Parser;
use std::process;

mod cli;

fn main() {
    env_logger::init();
    let config = cli::Config::parse();

    if let Err(e) = cli::run(&config) {
        eprintln!("✗ {:#}", e);
        process::exit(1);
    }
}
