use clap::Parser;
use sloc_tally::args::Args;
use sloc_tally::config::Config;
use sloc_tally::logger;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger::init(args.verbose) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match sloc_tally::execute(&config, args.format, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
