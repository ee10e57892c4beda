//! Crossing detection and execution price

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on execution prices
pub const PRICE_DECIMALS: u32 = 2;

/// A bid and an ask cross when the bid is at least the ask.
pub fn can_match(bid_price: Decimal, ask_price: Decimal) -> bool {
    bid_price >= ask_price
}

/// Midpoint of the two limit prices, rounded half away from zero to
/// [`PRICE_DECIMALS`] places.
pub fn fair_price(bid_price: Decimal, ask_price: Decimal) -> Decimal {
    let midpoint = match bid_price.checked_add(ask_price) {
        Some(sum) => sum / Decimal::TWO,
        None => {
            // only same-sign prices overflow, so their difference is representable
            let (low, high) = if bid_price <= ask_price {
                (bid_price, ask_price)
            } else {
                (ask_price, bid_price)
            };
            low + (high - low) / Decimal::TWO
        }
    };
    midpoint.round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
