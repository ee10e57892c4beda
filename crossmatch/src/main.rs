use anyhow::Context;
use clap::Parser;
use crossmatch::config::RuntimeConfig;
use crossmatch::generator::OrderGenerator;
use crossmatch::{metrics, OrderBook};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Runtime config file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of rounds, overrides the config file
    #[arg(short, long)]
    rounds: Option<u64>,

    /// RNG seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print Prometheus metrics when the session ends
    #[arg(short, long)]
    metrics: bool,
}

fn dump_book(book: &OrderBook, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "-- asks --")?;
    let asks: Vec<_> = book.asks().collect();
    for order in asks.iter().rev() {
        writeln!(out, "{}", order)?;
    }
    writeln!(out, "-- bids --")?;
    for order in book.bids() {
        writeln!(out, "{}", order)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or_default();
    let args = Args::parse();

    let mut config = RuntimeConfig::from_toml(&args.config);
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid runtime config")?;
    metrics::init_registry();

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("session start, seed {}, {:?}", seed, config);
    let mut rng = StdRng::seed_from_u64(seed);
    let generator = OrderGenerator::new(&config);
    let mut book = OrderBook::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for round in 0..config.rounds {
        for order in generator.generate_batch(&mut rng, config.orders_per_round) {
            book.add_order(order);
        }
        let trades = book.match_orders();
        let notional: Decimal = trades.iter().map(|t| t.total_amount()).sum();
        log::info!(
            "round {}: {} trades, notional {}, {} bids ({} qty), {} asks ({} qty) resting",
            round,
            trades.len(),
            notional,
            book.bid_count(),
            book.bid_depth(),
            book.ask_count(),
            book.ask_depth()
        );
        for trade in &trades {
            let line = serde_json::to_string(trade).context("failed to encode trade")?;
            writeln!(out, "{}", line)?;
        }
        if config.dump_book {
            dump_book(&book, &mut out)?;
        }
    }

    if args.metrics {
        write!(out, "{}", metrics::gather_text()?)?;
    }
    Ok(())
}
