pub mod transaction;
pub use transaction::*;

pub mod lot;
pub use lot::*;

pub mod holding;
pub use holding::*;

pub mod realized;
pub use realized::*;

pub mod portfolio;
pub use portfolio::*;

pub mod config;
pub use config::*;

pub mod managers;
pub use managers::*;
