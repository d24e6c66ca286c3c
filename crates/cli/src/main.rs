use clap::Parser;
use reserve_sizer_cli::args::Args;
use reserve_sizer_cli::config::Config;
use reserve_sizer_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet);
    let config = Config::from(args);

    match reserve_sizer_cli::execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
