//! One side of the order book
//!
//! Orders are kept in a `BTreeMap` keyed by price-time priority so the first
//! entry is always the most aggressive resident order. Bids rank by negated
//! price, asks by price; ties fall back to creation time and then to insertion
//! order.

use crate::engine::entry::{Order, OrderSide};
use rust_decimal::Decimal;
use std::collections::btree_map::{BTreeMap, OccupiedEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct PriorityKey {
    rank: Decimal,
    created_at: u64,
    sequence: u64,
}

#[derive(Debug, Clone)]
pub struct BookSide {
    side: OrderSide,
    orders: BTreeMap<PriorityKey, Order>,
    next_sequence: u64,
}

impl BookSide {
    pub fn new(side: OrderSide) -> Self {
        Self {
            side,
            orders: BTreeMap::new(),
            next_sequence: 0,
        }
    }

    fn rank(&self, price: Decimal) -> Decimal {
        match self.side {
            OrderSide::Buy => -price,
            OrderSide::Sell => price,
        }
    }

    pub fn insert(&mut self, order: Order) {
        debug_assert_eq!(order.side(), self.side);
        let key = PriorityKey {
            rank: self.rank(order.price()),
            created_at: order.created_at(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.orders.insert(key, order);
    }

    /// Removes one resident entry equal to `order`, if any.
    pub fn remove(&mut self, order: &Order) -> Option<Order> {
        let rank = self.rank(order.price());
        let lo = PriorityKey {
            rank,
            created_at: order.created_at(),
            sequence: 0,
        };
        let hi = PriorityKey {
            sequence: u64::MAX,
            ..lo
        };
        let key = self
            .orders
            .range(lo..=hi)
            .find(|(_, resident)| *resident == order)
            .map(|(key, _)| *key)?;
        self.orders.remove(&key)
    }

    pub fn best(&self) -> Option<&Order> {
        self.orders.values().next()
    }

    pub(crate) fn best_entry(&mut self) -> Option<OccupiedEntry<'_, PriorityKey, Order>> {
        self.orders.first_entry()
    }

    /// Iterates resident orders best first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total resident quantity on this side
    pub fn depth(&self) -> u64 {
        self.orders.values().map(Order::quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(side: &BookSide) -> Vec<&str> {
        side.iter().map(Order::id).collect()
    }

    #[test]
    fn test_bids_best_is_highest_price() {
        let mut bids = BookSide::new(OrderSide::Buy);
        bids.insert(Order::new("low", OrderSide::Buy, 1, dec!(95)));
        bids.insert(Order::new("high", OrderSide::Buy, 1, dec!(110)));
        bids.insert(Order::new("mid", OrderSide::Buy, 1, dec!(100)));

        assert_eq!(bids.best().unwrap().id(), "high");
        assert_eq!(ids(&bids), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_asks_best_is_lowest_price() {
        let mut asks = BookSide::new(OrderSide::Sell);
        asks.insert(Order::new("high", OrderSide::Sell, 1, dec!(120)));
        asks.insert(Order::new("low", OrderSide::Sell, 1, dec!(105)));

        assert_eq!(asks.best().unwrap().id(), "low");
        assert_eq!(ids(&asks), vec!["low", "high"]);
    }

    #[test]
    fn test_equal_prices_rank_by_time() {
        let first = Order::new("first", OrderSide::Sell, 1, dec!(100));
        let second = Order::new("second", OrderSide::Sell, 1, dec!(100));
        let mut asks = BookSide::new(OrderSide::Sell);
        // insertion order is irrelevant, creation time decides
        asks.insert(second);
        asks.insert(first);

        assert_eq!(ids(&asks), vec!["first", "second"]);
    }

    #[test]
    fn test_duplicate_insert_is_resident_twice() {
        let order = Order::new("dup", OrderSide::Buy, 4, dec!(10));
        let mut bids = BookSide::new(OrderSide::Buy);
        bids.insert(order.clone());
        bids.insert(order.clone());
        assert_eq!(bids.len(), 2);
        assert_eq!(bids.depth(), 8);

        assert_eq!(bids.remove(&order), Some(order.clone()));
        assert_eq!(bids.len(), 1);
        assert_eq!(bids.remove(&order), Some(order.clone()));
        assert!(bids.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut bids = BookSide::new(OrderSide::Buy);
        bids.insert(Order::new("kept", OrderSide::Buy, 3, dec!(50)));
        let stranger = Order::new("stranger", OrderSide::Buy, 3, dec!(50));

        assert_eq!(bids.remove(&stranger), None);
        assert_eq!(ids(&bids), vec!["kept"]);
    }
}
