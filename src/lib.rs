pub mod dsp;
pub mod error;
pub mod io;
pub mod signal;

pub use dsp::{ButterworthHighPass, HighPass, OnePoleHighPass};
pub use error::FilterError;
