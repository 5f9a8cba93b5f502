pub mod io_error;
pub use io_error::*;

pub mod validation;
pub use validation::*;

pub mod import_error;
pub use import_error::*;

pub mod config_error;
pub use config_error::*;
