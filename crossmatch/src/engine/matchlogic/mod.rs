//! Match Logic Module
//!
//! This module implements the periodic crossing of the book. It provides the
//! crossing test, the fair-price rule and the matching loop that pairs the best
//! buy with the best sell under price-time priority.

pub mod crossing;
pub mod matcher;

pub use matcher::cross_sides;
