//! Entry Types
//!
//! Value types handed across the engine boundary: orders going in and trades
//! coming out.

pub mod order;
pub mod trade;

pub use order::{Order, OrderSide};
pub use trade::Trade;
