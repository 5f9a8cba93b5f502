use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::structs::{AssetId, Holding, Transaction, TransactionKind};

use super::chronological;

/* Average cost view of the holdings: one pass over every transaction, in time order.

This is not the FIFO view used for the realized P&L (see `compute_realized_pnl`), both cost models
exist on purpose: average cost for what is held, FIFO for what was sold. */
pub fn compute_holdings(transactions: &[Transaction]) -> HashMap<AssetId, Holding> {
    accumulate_holdings(chronological(transactions))
}

/* Holdings as they were at `cutoff` (transactions at exactly `cutoff` included) */
pub fn compute_holdings_as_of(
    transactions: &[Transaction],
    cutoff: DateTime<Utc>,
) -> HashMap<AssetId, Holding> {
    accumulate_holdings(
        chronological(transactions)
            .into_iter()
            .filter(|tx| tx.effective_time() <= cutoff),
    )
}

fn accumulate_holdings<'a>(
    ordered: impl IntoIterator<Item = &'a Transaction>,
) -> HashMap<AssetId, Holding> {
    let mut holdings: HashMap<AssetId, Holding> = HashMap::new();
    for tx in ordered {
        let holding = holdings.entry(tx.asset_id.clone()).or_default();
        match tx.kind {
            TransactionKind::Buy => apply_buy(holding, tx),
            TransactionKind::Sell => apply_sell(holding, tx),
        }
    }
    holdings
}

fn apply_buy(holding: &mut Holding, tx: &Transaction) {
    holding.quantity += tx.quantity;
    holding.total_invested += tx.amount_usd + tx.fee();
    holding.avg_cost_basis = average(holding.total_invested, holding.quantity);
    holding.total_fees += tx.fee();
}

/* The invested amount shrinks with the share of the quantity sold. Selling more than held floors everything at zero */
fn apply_sell(holding: &mut Holding, tx: &Transaction) {
    let sold_ratio = if holding.quantity > Decimal::ZERO {
        (tx.quantity / holding.quantity).clamp(Decimal::ZERO, Decimal::ONE)
    } else {
        Decimal::ZERO
    };

    if tx.quantity > holding.quantity {
        debug!(
            "Sell {} of {} {} exceeds the {} held, quantity floored at zero",
            tx.id, tx.quantity, tx.asset_id, holding.quantity
        );
    }

    holding.total_invested = (holding.total_invested * (Decimal::ONE - sold_ratio)).max(Decimal::ZERO);
    holding.quantity = (holding.quantity - tx.quantity).max(Decimal::ZERO);
    holding.avg_cost_basis = average(holding.total_invested, holding.quantity);
    holding.total_fees += tx.fee();
}

fn average(invested: Decimal, quantity: Decimal) -> Decimal {
    if quantity > Decimal::ZERO {
        invested / quantity
    } else {
        Decimal::ZERO
    }
}
