use clap::Parser;

use simple_outcome::cli::Cli;
use simple_outcome::logger;

fn main() {
    let cli = Cli::parse();

    let result = logger::init(cli.log_level.as_deref()).and_then(|()| simple_outcome::run(cli));
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
