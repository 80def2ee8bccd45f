//! sudo-insults CLI - generate a module of sudo insults.

mod cli;
mod commands;
mod logging;
mod report;

use clap::Parser;
use cli::Cli;

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "sudo-insults".to_string())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match report::report_parse_error(&e, &program_name()) {
            Some((out, code)) => {
                print!("{}", out);
                std::process::exit(code);
            }
            None => e.exit(),
        },
    };

    let _logger = match logging::init(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: could not start logging: {}", e);
            None
        }
    };

    let result = commands::generate::run(
        &cli.insults,
        cli.cache_dir,
        cli.output_dir,
        cli.base_url,
        cli.target,
        cli.json,
        cli.verbose,
    );

    if let Err(e) = result {
        let (out, code) = report::report_error(&*e, &program_name());
        print!("{}", out);
        std::process::exit(code);
    }
}
