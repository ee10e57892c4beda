use crate::engine::data::BookSide;
use crate::engine::entry::Trade;
use crate::engine::matchlogic::crossing;

/// Crosses the two sides until either is empty or the best pair no longer
/// crosses. Returns trades in execution order.
///
/// Every step fully consumes the smaller of the two best orders, so the number
/// of trades never exceeds the number of resident orders.
pub fn cross_sides(bids: &mut BookSide, asks: &mut BookSide) -> Vec<Trade> {
    let mut trades = Vec::new();

    while let (Some(mut bid), Some(mut ask)) = (bids.best_entry(), asks.best_entry()) {
        let (buy, sell) = (bid.get(), ask.get());
        if !crossing::can_match(buy.price(), sell.price()) {
            break;
        }

        let quantity = buy.quantity().min(sell.quantity());
        let price = crossing::fair_price(buy.price(), sell.price());
        let buy_residual = buy.quantity() - quantity;
        let sell_residual = sell.quantity() - quantity;
        let trade = Trade::new(buy.id().to_string(), sell.id().to_string(), quantity, price);
        log::debug!(
            "trade buy={} sell={} qty={} price={}",
            trade.buy_order_id,
            trade.sell_order_id,
            quantity,
            price
        );
        trades.push(trade);

        if buy_residual > 0 {
            bid.get_mut().set_quantity(buy_residual);
        } else {
            bid.remove();
        }
        if sell_residual > 0 {
            ask.get_mut().set_quantity(sell_residual);
        } else {
            ask.remove();
        }
    }

    trades
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::entry::{Order, OrderSide};
    use rust_decimal_macros::dec;

    fn sides(buys: &[(&str, u64, i64)], sells: &[(&str, u64, i64)]) -> (BookSide, BookSide) {
        let mut bids = BookSide::new(OrderSide::Buy);
        let mut asks = BookSide::new(OrderSide::Sell);
        for (id, qty, price) in buys {
            bids.insert(Order::new(*id, OrderSide::Buy, *qty, (*price).into()));
        }
        for (id, qty, price) in sells {
            asks.insert(Order::new(*id, OrderSide::Sell, *qty, (*price).into()));
        }
        (bids, asks)
    }

    #[test]
    fn test_empty_side_yields_nothing() {
        let (mut bids, mut asks) = sides(&[("b", 5, 100)], &[]);
        assert!(cross_sides(&mut bids, &mut asks).is_empty());
        assert_eq!(bids.len(), 1);
    }

    #[test]
    fn test_sell_residual_carries_forward() {
        let (mut bids, mut asks) = sides(&[("b", 4, 101)], &[("s", 10, 99)]);
        let trades = cross_sides(&mut bids, &mut asks);

        assert_eq!(trades, vec![Trade::new("b".into(), "s".into(), 4, dec!(100))]);
        assert!(bids.is_empty());
        assert_eq!(asks.best().unwrap().quantity(), 6);
    }

    #[test]
    fn test_buy_residual_sweeps_multiple_asks() {
        let (mut bids, mut asks) = sides(
            &[("b", 10, 105)],
            &[("s1", 3, 100), ("s2", 4, 102), ("s3", 5, 110)],
        );
        let trades = cross_sides(&mut bids, &mut asks);

        assert_eq!(
            trades,
            vec![
                Trade::new("b".into(), "s1".into(), 3, dec!(102.5)),
                Trade::new("b".into(), "s2".into(), 4, dec!(103.5)),
            ]
        );
        assert_eq!(bids.best().unwrap().quantity(), 3);
        assert_eq!(asks.best().unwrap().id(), "s3");
    }

    #[test]
    fn test_equal_quantities_consume_both() {
        let (mut bids, mut asks) = sides(&[("b", 7, 100)], &[("s", 7, 100)]);
        let trades = cross_sides(&mut bids, &mut asks);

        assert_eq!(trades.len(), 1);
        assert!(bids.is_empty());
        assert!(asks.is_empty());
    }

    #[test]
    fn test_time_priority_among_equal_bids() {
        let (mut bids, mut asks) = sides(&[("early", 5, 100), ("late", 5, 100)], &[("s", 5, 100)]);
        let trades = cross_sides(&mut bids, &mut asks);

        assert_eq!(trades[0].buy_order_id, "early");
        assert_eq!(bids.best().unwrap().id(), "late");
    }
}
