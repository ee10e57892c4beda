use anyhow::Context;
use clap::Parser;
use crossmatch::config::RuntimeConfig;
use crossmatch::generator::OrderGenerator;
use crossmatch::OrderBook;
use hdrhistogram::Histogram;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of matching passes
    #[arg(short, long, default_value = "1000")]
    passes: u64,

    /// Orders added before each pass
    #[arg(short, long, default_value = "100")]
    orders: usize,

    /// Upper bound of the generated price range
    #[arg(long, default_value = "100.0")]
    max_price: f64,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or_default();
    let args = Args::parse();

    let config = RuntimeConfig {
        orders_per_round: args.orders,
        max_price: args.max_price,
        seed: Some(args.seed),
        ..RuntimeConfig::new()
    };
    config.validate().context("invalid benchmark parameters")?;

    let generator = OrderGenerator::new(&config);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut book = OrderBook::new();
    let mut histogram = Histogram::<u64>::new(3).context("failed to create histogram")?;
    let mut total_trades = 0u64;

    println!(
        "Starting benchmark with {} passes, {} orders per pass",
        args.passes, args.orders
    );

    let started = Instant::now();
    for _ in 0..args.passes {
        for order in generator.generate_batch(&mut rng, args.orders) {
            book.add_order(order);
        }
        let start = Instant::now();
        let trades = book.match_orders();
        histogram
            .record(start.elapsed().as_micros() as u64)
            .context("failed to record latency")?;
        total_trades += trades.len() as u64;
    }
    let elapsed = started.elapsed().as_secs_f64();

    println!("\nBenchmark Results:");
    println!("Total Passes: {}", args.passes);
    println!("Total Trades: {}", total_trades);
    println!("Resting Orders: {}", book.len());
    println!(
        "Orders/sec: {:.2}",
        (args.passes as f64 * args.orders as f64) / elapsed
    );
    println!("\nMatch Pass Latency (microseconds):");
    println!("p50: {}", histogram.value_at_percentile(50.0));
    println!("p90: {}", histogram.value_at_percentile(90.0));
    println!("p95: {}", histogram.value_at_percentile(95.0));
    println!("p99: {}", histogram.value_at_percentile(99.0));
    println!("p99.9: {}", histogram.value_at_percentile(99.9));

    Ok(())
}
