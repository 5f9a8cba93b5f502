pub mod ordering;
pub use ordering::*;

pub mod lot_queue;
pub use lot_queue::*;

pub mod holdings;
pub use holdings::*;

pub mod realized_pnl;
pub use realized_pnl::*;

pub mod portfolio_metrics;
pub use portfolio_metrics::*;

pub mod report;
pub use report::*;
