pub mod config;
pub mod error;
pub mod signal_processing;
pub mod tables;

pub use config::FilterConfig;
pub use error::{FirError, Result};
pub use signal_processing::{CoefficientSet, FixedPointFir, SampleFilter};
