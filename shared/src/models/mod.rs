//! Domain models for the Rx Burn Weather Planner

mod evaluation;
mod forecast;
mod prescription;

pub use evaluation::*;
pub use forecast::*;
pub use prescription::*;
