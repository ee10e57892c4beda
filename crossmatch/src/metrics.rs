//! Metrics collection module for the matching engine
//!
//! This module provides counters and a latency histogram for order book
//! activity using Prometheus. Nothing is served over the network; callers
//! gather the registry and render it themselves.

use lazy_static::lazy_static;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

lazy_static! {
    /// Global Prometheus registry instance
    pub static ref REGISTRY_INSTANCE: Registry = Registry::new();

    /// Orders rested through `add_order`
    pub static ref ORDERS_ADDED_COUNTER: IntCounter =
        IntCounter::new("orders_added", "orders added to the book").unwrap();

    /// Trade records produced by matching passes
    pub static ref TRADES_COUNTER: IntCounter =
        IntCounter::new("trades_executed", "trades executed").unwrap();

    /// Sum of traded quantity
    pub static ref MATCHED_QUANTITY_COUNTER: IntCounter =
        IntCounter::new("matched_quantity", "quantity matched").unwrap();

    /// Duration of one `match_orders` call in seconds
    pub static ref MATCH_PASS_HISTOGRAM: Histogram =
        Histogram::with_opts(HistogramOpts::new("match_pass_cost", "match pass cost")).unwrap();
}

/// Initializes the metrics registry
///
/// Registers all metric collectors with the global registry. Calling it more
/// than once is harmless.
pub fn init_registry() {
    let _ = REGISTRY_INSTANCE.register(Box::new(ORDERS_ADDED_COUNTER.clone()));
    let _ = REGISTRY_INSTANCE.register(Box::new(TRADES_COUNTER.clone()));
    let _ = REGISTRY_INSTANCE.register(Box::new(MATCHED_QUANTITY_COUNTER.clone()));
    let _ = REGISTRY_INSTANCE.register(Box::new(MATCH_PASS_HISTOGRAM.clone()));
}

/// Renders the registry in the Prometheus text exposition format
pub fn gather_text() -> anyhow::Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY_INSTANCE.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
