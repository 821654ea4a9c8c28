// Times one computation of 1 + 2 + ... + n and prints the elapsed time.

use clap::Parser;
use sum_bench::{CliArgs, run_bench};

fn main() -> Result<(), String> {
    env_logger::init();

    let args = CliArgs::parse();
    println!("{}", run_bench(&args)?);

    Ok(())
}
