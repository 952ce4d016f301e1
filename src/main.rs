//! update_dependency CLI entry point

use clap::Parser;
use std::process;
use update_dependency::cli::common::{EXIT_FAILURE, EXIT_SUCCESS, init_logging};
use update_dependency::cli::{Cli, ColorChoice, USAGE};
use update_dependency::output::Reporter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let _ = e.print();
            if !e.use_stderr() {
                process::exit(EXIT_SUCCESS);
            }
            let _ = Reporter::stdout(ColorChoice::Auto).usage(USAGE);
            process::exit(EXIT_FAILURE);
        }
    };

    init_logging(cli.verbose);

    let exit_code = update_dependency::cli::update::run_update(&cli);

    process::exit(exit_code);
}
