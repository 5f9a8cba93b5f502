use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    structs::{price_of, AssetPosition, CoinStats, PortfolioMetrics, PriceMap, Transaction},
    utils::percentage,
};

use super::{compute_holdings, compute_realized_pnl};

/* Portfolio wide figures. Holdings and realized P&L are computed once each, the held assets are valued with
`prices` (an asset missing from the map is worth 0, its position still shows up so it can be flagged) */
pub fn compute_portfolio_metrics(transactions: &[Transaction], prices: &PriceMap) -> PortfolioMetrics {
    let holdings = compute_holdings(transactions);
    let realized = compute_realized_pnl(transactions);

    let mut held: Vec<_> = holdings.iter().filter(|(_, holding)| holding.is_held()).collect();
    held.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut metrics = PortfolioMetrics::default();
    for (asset_id, holding) in held {
        if !prices.contains_key(asset_id) {
            warn!("No price for held asset {asset_id}, it is valued at 0");
        }
        let current_price = price_of(prices, asset_id);
        let current_value = holding.quantity * current_price;
        let unrealized_pnl = current_value - holding.total_invested;

        metrics.total_current_value += current_value;
        metrics.total_invested += holding.total_invested;
        metrics.unrealized_pnl += unrealized_pnl;
        metrics.asset_count += 1;
        metrics.positions.push(AssetPosition {
            asset_id: asset_id.clone(),
            quantity: holding.quantity,
            avg_cost_basis: holding.avg_cost_basis,
            current_price,
            current_value,
            total_invested: holding.total_invested,
            unrealized_pnl,
            unrealized_pnl_pct: percentage(unrealized_pnl, holding.total_invested),
            allocation_pct: Decimal::ZERO,
        });
    }

    for position in &mut metrics.positions {
        position.allocation_pct = percentage(position.current_value, metrics.total_current_value);
    }

    metrics.realized_pnl = realized.total_pnl();
    metrics.total_fees = total_fees(transactions);
    metrics.unrealized_pnl_pct = percentage(metrics.unrealized_pnl, metrics.total_invested);
    metrics.total_roi = percentage(
        metrics.unrealized_pnl + metrics.realized_pnl,
        metrics.total_invested,
    );
    metrics.oversells = realized.oversells;

    debug!(
        "Portfolio metrics over {} transactions: {} assets held",
        transactions.len(),
        metrics.asset_count
    );
    metrics
}

/* Stats of one asset. The transactions of the asset are picked out and everything is computed again on them */
pub fn compute_asset_stats(
    asset_id: &str,
    transactions: &[Transaction],
    current_price: Decimal,
) -> CoinStats {
    let asset_txs: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.asset_id == asset_id)
        .cloned()
        .collect();

    let holding = compute_holdings(&asset_txs)
        .remove(asset_id)
        .unwrap_or_default();
    let realized = compute_realized_pnl(&asset_txs);
    let realized_result = realized.for_asset(asset_id);

    let current_value = holding.quantity * current_price;
    let unrealized_pnl = current_value - holding.total_invested;

    CoinStats {
        asset_id: asset_id.to_string(),
        quantity: holding.quantity,
        avg_cost_basis: holding.avg_cost_basis,
        current_price,
        current_value,
        total_invested: holding.total_invested,
        unrealized_pnl,
        unrealized_pnl_pct: percentage(unrealized_pnl, holding.total_invested),
        realized_pnl: realized_result.pnl,
        total_fees: total_fees(&asset_txs),
        total_roi: percentage(unrealized_pnl + realized_result.pnl, holding.total_invested),
        realized: realized_result,
        tx_count: asset_txs.len(),
        oversells: realized.oversells,
    }
}

/* Every fee is counted once, straight from the transactions (buy and sell) */
pub fn total_fees(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(Transaction::fee).sum()
}
