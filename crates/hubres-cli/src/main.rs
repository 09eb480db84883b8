use clap::Parser;
use hubres_core::logging::{self, LogTarget};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    let target = if cli.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::StateFile
    };
    logging::init_logging(target, cli.verbose);

    if let Err(err) = cli.run() {
        eprintln!("hubres error: {:#}", err);
        std::process::exit(1);
    }
}
