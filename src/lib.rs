pub mod errors;
pub mod functions;
pub mod parsing;
pub mod structs;
pub mod utils;


pub use functions::{
    build_lot_queues, compute_asset_stats, compute_holdings, compute_holdings_as_of,
    compute_open_lots, compute_portfolio_metrics, compute_realized_pnl,
    compute_realized_pnl_between,
};
pub use structs::{
    CoinStats, Holding, Lot, LotQueues, OversellWarning, PortfolioMetrics, PriceMap, RealizedPnl,
    RealizedResult, Transaction, TransactionKind,
};
