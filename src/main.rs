use clap::Parser;
use std::process;
use wigos_log_processor::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("An error occurred: {:#}", error);
            process::exit(1);
        }
    }
}
