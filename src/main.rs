mod cli;

use clap::Parser;
use cli::Cli;

pub fn main() -> anyhow::Result<()> {
    // RUST_LOG picks the verbosity, quiet by default
    env_logger::init();

    let args = Cli::parse();
    let result = cli::evaluate(&args)?;
    println!("{}", result);
    Ok(())
}
