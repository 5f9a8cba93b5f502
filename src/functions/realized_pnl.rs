/* FIFO realized P&L.

Every call starts from its own fresh copy of the lot queues (`build_lot_queues`), then replays the sells in time
order, each one consuming lots from the front of its asset queue. Each lot is popped once at most, so the sweep is
linear after the sort.

The queues hold every buy of the asset, whatever its date. When they run out, the rest of the sell has a zero cost
basis and is reported as an `OversellWarning`. */
use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::structs::{
    Lot, LotQueues, OversellWarning, RealizedPnl, RealizedResult, Transaction, TransactionKind,
    TransactionPnl,
};

use super::{build_lot_queues, chronological};

pub fn compute_realized_pnl(transactions: &[Transaction]) -> RealizedPnl {
    replay(transactions, |_| true).0
}

/* Realized P&L of the sells in [from, to). Lots still come from the whole history */
pub fn compute_realized_pnl_between(
    transactions: &[Transaction],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> RealizedPnl {
    replay(transactions, |tx| {
        let time = tx.effective_time();
        time >= from && time < to
    })
    .0
}

/* What is left of each lot once every sell has been matched. Assets with nothing left are absent */
pub fn compute_open_lots(transactions: &[Transaction]) -> LotQueues {
    replay(transactions, |_| true).1
}

fn replay(
    transactions: &[Transaction],
    is_reported: impl Fn(&Transaction) -> bool,
) -> (RealizedPnl, LotQueues) {
    let mut realized = RealizedPnl::default();
    let mut queues = build_lot_queues(transactions);

    for tx in chronological(transactions) {
        match tx.kind {
            // Already in the queues
            TransactionKind::Buy => {}
            TransactionKind::Sell => {
                let (cost_basis, unmatched) = consume_lots(queues.get_mut(&tx.asset_id), tx.quantity);
                if !is_reported(tx) {
                    continue;
                }

                if unmatched > Decimal::ZERO {
                    warn!(
                        "Sell {} of {} {}: {} units have no matching buy, counted with a zero cost basis",
                        tx.id, tx.quantity, tx.asset_id, unmatched
                    );
                    realized.oversells.push(OversellWarning {
                        transaction_id: tx.id.clone(),
                        asset_id: tx.asset_id.clone(),
                        unmatched_quantity: unmatched,
                    });
                }

                let result = RealizedResult::new(tx.amount_usd - tx.fee(), cost_basis);
                realized.by_transaction.insert(
                    tx.id.clone(),
                    TransactionPnl {
                        pnl: result.pnl,
                        pnl_pct: result.pnl_pct,
                    },
                );
                realized
                    .by_asset
                    .entry(tx.asset_id.clone())
                    .or_default()
                    .accumulate(&result);
            }
        }
    }

    queues.retain(|_, queue| {
        queue.retain(|lot| !lot.is_exhausted());
        !queue.is_empty()
    });

    debug!(
        "Realized P&L computed for {} sells over {} assets",
        realized.by_transaction.len(),
        realized.by_asset.len()
    );
    (realized, queues)
}

/* Consume `quantity` units from the front of the queue. Return the cost basis of the units matched and the
quantity that could not be matched */
fn consume_lots(queue: Option<&mut VecDeque<Lot>>, quantity: Decimal) -> (Decimal, Decimal) {
    let mut remaining = quantity;
    let mut cost_basis = Decimal::ZERO;

    if let Some(queue) = queue {
        while remaining > Decimal::ZERO {
            let Some(lot) = queue.front_mut() else {
                break;
            };
            if lot.is_exhausted() {
                // A buy with a zero quantity has nothing to give
                queue.pop_front();
                continue;
            }

            let consumed = remaining.min(lot.quantity);
            cost_basis += lot.cost_of(consumed);
            lot.quantity -= consumed;
            remaining -= consumed;

            if lot.is_exhausted() {
                queue.pop_front();
            }
        }
    }

    (cost_basis, remaining.max(Decimal::ZERO))
}
