use hashbrown::HashMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{AssetId, OversellWarning, RealizedResult};

/* Current USD price of each asset. A missing asset is worth 0 */
pub type PriceMap = HashMap<AssetId, Decimal>;

pub fn price_of(prices: &PriceMap, asset_id: &str) -> Decimal {
    prices.get(asset_id).copied().unwrap_or(Decimal::ZERO)
}

/* Representation of the whole portfolio, valued with the given prices.

Only the assets still held are valued (current value, invested, unrealized), the realized part covers every asset. */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioMetrics {
    pub total_current_value: Decimal,
    pub total_invested: Decimal,
    pub unrealized_pnl: Decimal,
    pub unrealized_pnl_pct: Decimal,
    pub realized_pnl: Decimal,
    pub total_fees: Decimal,
    pub total_roi: Decimal,
    pub asset_count: usize,
    pub positions: Vec<AssetPosition>, // Sorted by asset id
    pub oversells: Vec<OversellWarning>,
}

/* One line of the portfolio for an asset still held */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetPosition {
    pub asset_id: AssetId,
    pub quantity: Decimal,
    pub avg_cost_basis: Decimal,
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub total_invested: Decimal,
    pub unrealized_pnl: Decimal,
    pub unrealized_pnl_pct: Decimal,
    pub allocation_pct: Decimal, // Share of the portfolio current value
}

/* Same figures as the portfolio, for a single asset */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoinStats {
    pub asset_id: AssetId,
    pub quantity: Decimal,
    pub avg_cost_basis: Decimal,
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub total_invested: Decimal,
    pub unrealized_pnl: Decimal,
    pub unrealized_pnl_pct: Decimal,
    pub realized: RealizedResult,
    pub realized_pnl: Decimal,
    pub total_fees: Decimal,
    pub total_roi: Decimal,
    pub tx_count: usize,
    pub oversells: Vec<OversellWarning>,
}
