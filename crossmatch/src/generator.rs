//! Random order source used by the driver and the benchmark.

use crate::config::RuntimeConfig;
use crate::engine::entry::{Order, OrderSide};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

const ID_LEN: usize = 6;
const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws random orders within the configured price and quantity ranges.
#[derive(Debug, Clone)]
pub struct OrderGenerator {
    min_price: f64,
    max_price: f64,
    max_quantity: u64,
}

impl OrderGenerator {
    /// `config` is expected to have passed [`RuntimeConfig::validate`].
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            min_price: config.min_price,
            max_price: config.max_price,
            max_quantity: config.max_quantity,
        }
    }

    /// Six characters drawn uniformly from `A-Z0-9`.
    pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
        (0..ID_LEN)
            .filter_map(|_| ID_CHARSET.choose(rng))
            .map(|&b| b as char)
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Order {
        let side = if rng.gen_bool(0.5) {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        };
        let quantity = rng.gen_range(1..=self.max_quantity);
        let raw = rng.gen_range(self.min_price..self.max_price);
        // floor keeps the price strictly below max_price
        let price = Decimal::from_f64_retain(raw)
            .unwrap_or_default()
            .round_dp_with_strategy(2, RoundingStrategy::ToNegativeInfinity);
        Order::new(Self::random_id(rng), side, quantity, price)
    }

    pub fn generate_batch<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Order> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}
