use std::io::Write;
use std::time::Instant;

use crate::utils::*;
use clap::Parser;

mod utils;

#[derive(Parser)]
#[command(
    name = "fibo",
    author,
    about = "Compute the n-th Fibonacci number by naive recursion, repeated to amplify runtime",
    long_about = None,
    version
)]
struct FiboCli {
    /// Index of the Fibonacci number to compute.
    n: i32,
    /// How many times to repeat the calculation; results are summed
    /// into a wrapping i32 accumulator.
    cycles: u32,

    /// Suppress log output; the result line is still printed.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = FiboCli::parse();
    if let Err(e) = run(args) {
        print_error(e);
        std::process::exit(1);
    }
}

fn run(args: FiboCli) -> anyhow::Result<()> {
    if !args.quiet {
        try_setup_logger();
    }

    let start = Instant::now();
    let sum = fibo::accumulate(args.n, args.cycles);
    tracing::info!(
        "{} cycles of calculate({}) in {:.2}s",
        args.cycles,
        args.n,
        start.elapsed().as_secs_f32()
    );

    // No trailing newline, so flush explicitly.
    print!("{}-th Fibonacci number is {}", args.n, sum);
    std::io::stdout().flush()?;
    Ok(())
}
