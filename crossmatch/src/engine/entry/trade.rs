//! Trade Records
//!
//! A trade is the output of one matched buy/sell pair. The serialized shape is
//! exactly `{buy_order_id, sell_order_id, quantity, price}` so downstream
//! consumers can read it without knowing about this crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one execution between a resting buy and a resting sell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// ID of the buy order
    pub buy_order_id: String,
    /// ID of the sell order
    pub sell_order_id: String,
    /// Quantity exchanged
    pub quantity: u64,
    /// Execution price, rounded to two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Trade {
    pub fn new(
        buy_order_id: String,
        sell_order_id: String,
        quantity: u64,
        price: Decimal,
    ) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            quantity,
            price,
        }
    }

    /// Calculates the notional value of the trade
    pub fn total_amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
