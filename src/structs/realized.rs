use hashbrown::HashMap;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::percentage;

use super::{AssetId, TransactionId};

/* Realized result of one sell, or the running total of every sell of an asset */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RealizedResult {
    pub proceeds: Decimal,
    pub cost_basis: Decimal,
    pub pnl: Decimal,
    pub pnl_pct: Decimal,
}

impl RealizedResult {
    pub fn new(proceeds: Decimal, cost_basis: Decimal) -> Self {
        let pnl = proceeds - cost_basis;
        RealizedResult {
            proceeds,
            cost_basis,
            pnl,
            pnl_pct: percentage(pnl, cost_basis),
        }
    }

    /* The percentage is taken on the totals, never averaged over the sells */
    pub fn accumulate(&mut self, other: &RealizedResult) {
        self.proceeds += other.proceeds;
        self.cost_basis += other.cost_basis;
        self.pnl += other.pnl;
        self.pnl_pct = percentage(self.pnl, self.cost_basis);
    }
}

/* Per sell transaction figures */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransactionPnl {
    pub pnl: Decimal,
    pub pnl_pct: Decimal,
}

/* A sell asked for more units than the lots could give. The extra units were counted with a zero cost basis,
the caller should show it as a data quality issue (missing buy, wrong quantity...) */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OversellWarning {
    pub transaction_id: TransactionId,
    pub asset_id: AssetId,
    pub unmatched_quantity: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RealizedPnl {
    pub by_asset: HashMap<AssetId, RealizedResult>,
    pub by_transaction: HashMap<TransactionId, TransactionPnl>,
    pub oversells: Vec<OversellWarning>,
}

impl RealizedPnl {
    pub fn total_pnl(&self) -> Decimal {
        self.by_asset.values().map(|result| result.pnl).sum()
    }

    pub fn for_asset(&self, asset_id: &str) -> RealizedResult {
        self.by_asset.get(asset_id).cloned().unwrap_or_default()
    }

    pub fn has_oversells(&self) -> bool {
        !self.oversells.is_empty()
    }
}
