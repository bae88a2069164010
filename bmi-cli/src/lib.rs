pub mod batch;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod logging;
pub mod report;

pub use calculator::{CalculationError, Calculator};
pub use config::Config;
