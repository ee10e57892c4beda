//! Order Types
//!
//! An order is a resting intent to buy or sell a quantity at a limit price.
//! Everything except the residual quantity is fixed at construction, and the
//! residual is only ever reduced by the order book's matching pass.

use crate::error::MatchError;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

static CLOCK_ANCHOR: Lazy<Instant> = Lazy::new(Instant::now);
static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// Nanoseconds since the process anchor, strictly increasing across calls.
fn next_timestamp() -> u64 {
    let now = CLOCK_ANCHOR.elapsed().as_nanos() as u64;
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let stamp = now.max(last + 1);
        match LAST_STAMP.compare_exchange_weak(last, stamp, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return stamp,
            Err(actual) => last = actual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl FromStr for OrderSide {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderSide::Buy),
            "sell" => Ok(OrderSide::Sell),
            _ => Err(MatchError::InvalidSide(s.to_string())),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// A single limit order.
///
/// `quantity` must be positive and `price` must be small enough that the sum of
/// two prices stays representable; neither is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    side: OrderSide,
    quantity: u64,
    price: Decimal,
    created_at: u64,
}

impl Order {
    /// Creates an order stamped with the current monotonic time.
    pub fn new(id: impl Into<String>, side: OrderSide, quantity: u64, price: Decimal) -> Self {
        Self {
            id: id.into(),
            side,
            quantity,
            price,
            created_at: next_timestamp(),
        }
    }

    /// Creates an order from a textual side such as `"buy"` or `"SELL"`.
    ///
    /// # Returns
    /// * `Ok(Order)` - The new order
    /// * `Err(MatchError::InvalidSide)` - If `side` names neither buy nor sell
    pub fn try_new(
        id: impl Into<String>,
        side: &str,
        quantity: u64,
        price: Decimal,
    ) -> Result<Self, MatchError> {
        let side = side.parse::<OrderSide>()?;
        Ok(Self::new(id, side, quantity, price))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    /// Residual quantity still open for matching.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(id={}, side={}, qty={}, price={}, time={})",
            self.id, self.side, self.quantity, self.price, self.created_at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_side_parsing() {
        assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!(" Sell ".parse::<OrderSide>().unwrap(), OrderSide::Sell);
    }

    #[test]
    fn test_invalid_side_rejected() {
        let err = Order::try_new("A1", "hold", 10, dec!(100)).unwrap_err();
        assert_eq!(err, MatchError::InvalidSide("hold".to_string()));
        assert!("".parse::<OrderSide>().is_err());
    }

    #[test]
    fn test_invalid_side_rejected_on_deserialize() {
        let result: Result<OrderSide, _> = serde_json::from_str("\"short\"");
        assert!(result.is_err());
        let side: OrderSide = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, OrderSide::Sell);
    }

    #[test]
    fn test_created_at_strictly_increasing() {
        let first = Order::new("1", OrderSide::Buy, 1, dec!(1));
        let second = Order::new("2", OrderSide::Buy, 1, dec!(1));
        let third = Order::new("3", OrderSide::Sell, 1, dec!(1));
        assert!(first.created_at() < second.created_at());
        assert!(second.created_at() < third.created_at());
    }

    #[test]
    fn test_display() {
        let order = Order::new("XY12Z9", OrderSide::Sell, 15, dec!(105.25));
        let text = order.to_string();
        assert!(text.starts_with("Order(id=XY12Z9, side=sell, qty=15, price=105.25, time="));
    }
}
