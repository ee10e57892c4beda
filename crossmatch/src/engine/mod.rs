//! Match Engine Module
//!
//! This module contains the core components of the matching engine:
//! - `data`: The order book and its per-side priority queues
//! - `entry`: Order and trade value types
//! - `matchlogic`: Crossing test, fair price and the matching loop

pub mod data;
pub mod entry;
pub mod matchlogic;

pub use data::OrderBook;
pub use entry::{Order, OrderSide, Trade};
