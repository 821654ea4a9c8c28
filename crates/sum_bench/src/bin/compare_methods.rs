//! Times the closed form against the loops it replaces.
//!
//! Results are logged, so run with e.g.
//!  RUST_LOG=info ./target/release/compare_methods --n 1000000000

use clap::Parser;
use sum_bench::{Method, build_thread_pool, run_method, timing::time_call};

const N: u64 = 100_000_000;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    #[arg(long)]
    n: Option<u64>,
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = Args::parse();
    let n = args.n.unwrap_or(N);
    let thread_pool = build_thread_pool(args.threads)?;

    let mut sums = Vec::with_capacity(Method::ALL.len());
    for method in Method::ALL {
        let timed = time_call(|| run_method(method, n, &thread_pool));
        log::info!("{:?} sum: {}", method, timed.value);
        log::info!("{:?} time: {:?}", method, timed.elapsed);
        sums.push(timed.value);
    }

    if sums.iter().any(|&sum| sum != sums[0]) {
        return Err(format!("Methods disagree for n = {n}: {sums:?}"));
    }
    log::info!("All methods agree.");

    Ok(())
}

// The loop versions are O(n), so expect the formula to win by many orders of
// magnitude; the parallel loop should scale roughly with the pool size.
