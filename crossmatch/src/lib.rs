//! Single-instrument continuous double-auction matching engine.
//!
//! Orders rest on a buy side and a sell side of an [`OrderBook`]. Each call to
//! [`OrderBook::match_orders`] crosses the best buy against the best sell under
//! price-time priority until no crossing pair remains, executing at the
//! midpoint of the two limit prices.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod metrics;

pub use engine::{Order, OrderBook, OrderSide, Trade};
pub use error::MatchError;
