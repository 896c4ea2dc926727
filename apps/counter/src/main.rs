use clap::Parser;

use cafe_counter::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cafe_counter::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
