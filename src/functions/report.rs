use serde::Serialize;

use crate::{
    errors::IoError,
    structs::{price_of, CoinStats, PortfolioMetrics, PriceMap, Transaction},
    utils::write_file,
};

use super::{compute_asset_stats, compute_portfolio_metrics};

/* What the command line prints: the whole portfolio or a single asset */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Portfolio(PortfolioMetrics),
    Asset(CoinStats),
}

pub fn build_report(transactions: &[Transaction], prices: &PriceMap, asset_id: Option<&str>) -> Report {
    match asset_id {
        Some(asset_id) => Report::Asset(compute_asset_stats(
            asset_id,
            transactions,
            price_of(prices, asset_id),
        )),
        None => Report::Portfolio(compute_portfolio_metrics(transactions, prices)),
    }
}

impl Report {
    pub fn oversell_count(&self) -> usize {
        match self {
            Report::Portfolio(metrics) => metrics.oversells.len(),
            Report::Asset(stats) => stats.oversells.len(),
        }
    }

    pub fn to_json(&self) -> Result<String, IoError> {
        serde_json::to_string_pretty(self).map_err(|e| IoError::new(e.to_string()))
    }

    pub fn save(&self, path: &str) -> Result<(), IoError> {
        let json = self.to_json()?;
        write_file(path, &json).map_err(|e| IoError::new(e.to_string()))
    }
}
