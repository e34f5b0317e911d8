use clap::{Parser, ValueEnum};
use crush::{
    reader::{buffering::Buffering, mapping::Mapping},
    Options, ReadingStrategy, E,
};
use log::warn;
use std::{path::PathBuf, process};

#[derive(Debug, Parser)]
#[command(
    name = "crush",
    version,
    about = "Fast non-cryptographic 64-bit file fingerprint"
)]
struct Cli {
    /// File to hash.
    file: PathBuf,

    /// How the file is read. The digest doesn't depend on it.
    #[arg(long, value_enum, default_value_t = CliStrategy::Buffer)]
    strategy: CliStrategy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliStrategy {
    Buffer,
    Complete,
    Mmap,
}

fn run(cli: &Cli) -> Result<(), E> {
    let outcome = match cli.strategy {
        CliStrategy::Buffer => Options::new().hash_file::<Buffering, _>(&cli.file)?,
        CliStrategy::Complete => Options::new()
            .reading_strategy(ReadingStrategy::Complete)
            .hash_file::<Buffering, _>(&cli.file)?,
        CliStrategy::Mmap => Options::new()
            .reading_strategy(ReadingStrategy::MemoryMapped)
            .hash_file::<Mapping, _>(&cli.file)?,
    };
    if outcome.base_state {
        warn!("{} folds to the initial state", cli.file.display());
        eprintln!("Hash is the base state because the file");
        eprintln!("is all zeroes and divisible by 64bits!");
    }
    println!("{} {}", outcome.digest, cli.file.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}
