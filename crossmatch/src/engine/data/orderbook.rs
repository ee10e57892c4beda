use crate::engine::data::BookSide;
use crate::engine::entry::{Order, OrderSide, Trade};
use crate::engine::matchlogic;
use crate::metrics;
use rust_decimal::Decimal;
use std::time::Instant;

/// Single-instrument order book.
///
/// Holds the resident buy and sell orders and crosses them on request. No
/// trade history is kept; the trades returned by [`OrderBook::match_orders`]
/// belong to the caller.
#[derive(Debug, Clone)]
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: BookSide::new(OrderSide::Buy),
            asks: BookSide::new(OrderSide::Sell),
        }
    }

    /// Rests the order on its own side. Does not match.
    pub fn add_order(&mut self, order: Order) {
        log::debug!("add {}", order);
        metrics::ORDERS_ADDED_COUNTER.inc();
        match order.side() {
            OrderSide::Buy => self.bids.insert(order),
            OrderSide::Sell => self.asks.insert(order),
        }
    }

    /// Removes a resident entry equal to `order`. Returns `None` when the
    /// order is not resident, e.g. because it was already filled.
    pub fn remove_order(&mut self, order: &Order) -> Option<Order> {
        let removed = match order.side() {
            OrderSide::Buy => self.bids.remove(order),
            OrderSide::Sell => self.asks.remove(order),
        };
        if removed.is_some() {
            log::debug!("remove {}", order);
        }
        removed
    }

    /// Runs one matching pass until no crossing pair remains.
    pub fn match_orders(&mut self) -> Vec<Trade> {
        let start = Instant::now();
        let trades = matchlogic::cross_sides(&mut self.bids, &mut self.asks);
        metrics::MATCH_PASS_HISTOGRAM.observe(start.elapsed().as_secs_f64());
        metrics::TRADES_COUNTER.inc_by(trades.len() as u64);
        metrics::MATCHED_QUANTITY_COUNTER.inc_by(trades.iter().map(|t| t.quantity).sum());
        trades
    }

    /// Resident buy orders, best first
    pub fn bids(&self) -> impl Iterator<Item = &Order> {
        self.bids.iter()
    }

    /// Resident sell orders, best first
    pub fn asks(&self) -> impl Iterator<Item = &Order> {
        self.asks.iter()
    }

    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Total resident buy quantity
    pub fn bid_depth(&self) -> u64 {
        self.bids.depth()
    }

    /// Total resident sell quantity
    pub fn ask_depth(&self) -> u64 {
        self.asks.depth()
    }

    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// First resident order with the given id, searching bids then asks
    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        self.bids().chain(self.asks()).find(|o| o.id() == order_id)
    }

    pub fn get_best_bid(&self) -> Option<Decimal> {
        self.bids.best().map(Order::price)
    }

    pub fn get_best_ask(&self) -> Option<Decimal> {
        self.asks.best().map(Order::price)
    }

    pub fn get_spread(&self) -> Option<Decimal> {
        match (self.get_best_ask(), self.get_best_bid()) {
            (Some(ask), Some(bid)) => Some(ask - bid),
            _ => None,
        }
    }
}
