use tracing::debug;

use crate::structs::{Lot, LotQueues, Transaction};

use super::chronological;

/* One lot per buy, per asset, oldest first. Sells are ignored here: the queues are the untouched acquisitions.
The result is owned by the caller, nothing else keeps a reference to it. */
pub fn build_lot_queues(transactions: &[Transaction]) -> LotQueues {
    let mut queues = LotQueues::new();
    for tx in chronological(transactions).into_iter().filter(|tx| tx.is_buy()) {
        queues
            .entry(tx.asset_id.clone())
            .or_default()
            .push_back(Lot::from_buy(tx));
    }
    debug!("Built lot queues for {} assets", queues.len());
    queues
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_buys_only_oldest_first() {
        let day = |d| Some(Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap());
        let txs = vec![
            Transaction::new_buy("b2", "btc", dec!(1), dec!(50000), day(2)),
            Transaction::new_sell("s1", "btc", dec!(1), dec!(40000), day(3)),
            Transaction::new_buy("b1", "btc", dec!(2), dec!(20000), day(1)).with_fees(dec!(10)),
            Transaction::new_buy("e1", "eth", dec!(3), dec!(2000), day(1)),
        ];

        let queues = build_lot_queues(&txs);

        let btc: Vec<&str> = queues["btc"].iter().map(|lot| lot.transaction_id.as_str()).collect();
        assert_eq!(btc, vec!["b1", "b2"]);
        assert_eq!(queues["btc"][0].quantity, dec!(2));
        assert_eq!(queues["btc"][0].fees, dec!(10));
        assert_eq!(queues["eth"].len(), 1);
    }

    #[test]
    fn test_lots_are_not_merged() {
        let txs = vec![
            Transaction::new_buy("a", "btc", dec!(1), dec!(100), None),
            Transaction::new_buy("b", "btc", dec!(1), dec!(100), None),
        ];
        assert_eq!(build_lot_queues(&txs)["btc"].len(), 2);
    }

    #[test]
    fn test_asset_without_buy_is_absent() {
        let txs = vec![Transaction::new_sell("s", "sol", dec!(1), dec!(100), None)];
        let queues = build_lot_queues(&txs);
        assert!(queues.is_empty());
        assert!(!queues.contains_key("sol"));
    }
}
