//! Data Structures Module
//!
//! This module contains the order book and the per-side priority queues it is
//! built from.

pub mod book_side;
pub mod orderbook;

pub use book_side::BookSide;
pub use orderbook::OrderBook;
