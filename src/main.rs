use clap::Parser;

use metal_gigs::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = metal_gigs::logging::init_logging(cli.verbose) {
        eprintln!("logging disabled: {err}");
    }
    if let Err(err) = metal_gigs::run(cli) {
        eprintln!("metal-gigs failed: {err:#}");
        std::process::exit(1);
    }
}
