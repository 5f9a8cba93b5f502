pub mod transactions_manager;
pub use transactions_manager::*;
