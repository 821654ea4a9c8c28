
// top-level library module

pub mod timing;

use add_up_to::{add_up_to, add_up_to_loop, add_up_to_par, checked_add_up_to};
use clap::{Parser, ValueEnum};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Input used when `--n` is not given.
pub const DEFAULT_N: u64 = 1_000_000_000;

/// Which implementation of the sum to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Closed form n (n + 1) / 2.
    Formula,
    /// Sequential loop over 1..=n.
    Loop,
    /// Loop over 1..=n split across a rayon thread pool.
    Parallel,
}

// setup command line args

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct CliArgs {
    #[arg(long)]
    pub n: Option<u64>,
    #[arg(long, value_enum)]
    pub method: Option<Method>,
    /// Pool size for the parallel method; defaults to the number of CPUs.
    #[arg(long)]
    pub threads: Option<usize>,
    /// Fail instead of wrapping when the sum does not fit in a u64.
    #[arg(long, action)]
    pub checked: bool,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Formula, Method::Loop, Method::Parallel];
}

pub fn run_method(method: Method, n: u64, thread_pool: &ThreadPool) -> u64 {
    match method {
        Method::Formula => add_up_to(n),
        Method::Loop => add_up_to_loop(n),
        Method::Parallel => add_up_to_par(n, thread_pool),
    }
}

/// Builds the pool `Method::Parallel` runs in, with one thread per CPU
/// unless `threads` says otherwise.
pub fn build_thread_pool(threads: Option<usize>) -> Result<ThreadPool, String> {
    let num_threads = threads.unwrap_or_else(num_cpus::get);
    log::debug!("Building thread pool with {num_threads} threads");

    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| format!("Unable to build thread pool: {e}"))
}

/// Times one sum as configured by `args` and returns the line to print.
///
/// The sum itself only goes to the log, so the returned line is the
/// benchmark's whole output.
pub fn run_bench(args: &CliArgs) -> Result<String, String> {
    let n = args.n.unwrap_or(DEFAULT_N);
    let method = args.method.unwrap_or(Method::Formula);

    if args.checked && checked_add_up_to(n).is_none() {
        return Err(format!("Sum of the first {n} integers overflows u64"));
    }

    // built before timing starts so pool startup is never measured
    let thread_pool = build_thread_pool(args.threads)?;

    let timed = timing::time_call(|| run_method(method, n, &thread_pool));
    log::info!("Method: {:?}, n: {}", method, n);
    log::info!("Sum: {}", timed.value);
    log::info!("Time to add numbers: {:?}", timed.elapsed);

    Ok(timing::elapsed_line(timed.elapsed))
}
