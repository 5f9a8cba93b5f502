use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{AssetId, Transaction, TransactionId};

/* One queue of lots per asset, the front is the oldest acquisition.
An asset without any buy never has an entry (no empty queue). */
pub type LotQueues = HashMap<AssetId, VecDeque<Lot>>;

/* A Lot is what is left of one buy transaction. Lots are never merged so each one can be traced back to its trade.

Only `quantity` moves: it is consumed by the sells during a single computation. The fees are spread over the
`original_quantity` so every unit of the lot carries the same share of the fee, whatever the order of the sells. */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lot {
    pub transaction_id: TransactionId,
    pub quantity: Decimal,
    pub original_quantity: Decimal,
    pub price_per_unit: Decimal,
    pub fees: Decimal,
    pub acquired_at: DateTime<Utc>,
}

impl Lot {
    pub fn from_buy(tx: &Transaction) -> Self {
        Lot {
            transaction_id: tx.id.clone(),
            quantity: tx.quantity,
            original_quantity: tx.quantity,
            price_per_unit: tx.price_per_unit,
            fees: tx.fee(),
            acquired_at: tx.effective_time(),
        }
    }

    pub fn fee_per_unit(&self) -> Decimal {
        if self.original_quantity > Decimal::ZERO {
            self.fees / self.original_quantity
        } else {
            Decimal::ZERO
        }
    }

    /* Cost of `amount` units of this lot: price plus the fee share. Saturates instead of panicking on unchecked input */
    pub fn cost_of(&self, amount: Decimal) -> Decimal {
        amount
            .saturating_mul(self.price_per_unit)
            .saturating_add(amount.saturating_mul(self.fee_per_unit()))
    }

    pub fn is_exhausted(&self) -> bool {
        self.quantity <= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_cost_of_spreads_fees() {
        let tx = Transaction::new_buy("buy", "btc", dec!(4), dec!(100), None).with_fees(dec!(8));
        let lot = Lot::from_buy(&tx);
        assert_eq!(lot.fee_per_unit(), dec!(2));
        assert_eq!(lot.cost_of(dec!(1)), dec!(102));
        assert_eq!(lot.cost_of(dec!(4)), dec!(408));
    }

    #[test]
    fn test_cost_of_does_not_panic() {
        let tx = Transaction::new_buy("buy", "btc", Decimal::MAX, Decimal::MAX, None);
        let lot = Lot::from_buy(&tx);
        assert_eq!(tx.amount_usd, Decimal::MAX);
        assert_eq!(lot.cost_of(Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_zero_quantity_lot() {
        let tx = Transaction::new_buy("buy", "btc", dec!(0), dec!(100), None).with_fees(dec!(8));
        let lot = Lot::from_buy(&tx);
        assert_eq!(lot.fee_per_unit(), dec!(0));
        assert!(lot.is_exhausted());
    }
}
