pub mod filter;
pub mod fir_fixed;

pub use filter::SampleFilter;
pub use fir_fixed::{CoefficientSet, FixedPointFir};
