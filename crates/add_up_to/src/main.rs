// This file is a place to try out the summation functions.

use add_up_to::{add_up_to, add_up_to_loop};

/// Which input to use.
const N: u64 = 10;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
  #[arg(long)]
  n: Option<u64>,
}

/// Prints the sum of the first n integers computed both ways.
fn main() {
  let args = Args::parse();
  let n = args.n.unwrap_or(N);

  println!("Closed form: {}", add_up_to(n));
  println!("Loop:        {}", add_up_to_loop(n));
}
