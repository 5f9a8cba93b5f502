pub mod validation;
pub use validation::*;

pub mod transactions_csv;
pub use transactions_csv::*;

pub mod prices_json;
pub use prices_json::*;
