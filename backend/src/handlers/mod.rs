//! HTTP request handlers

pub mod forecast;
pub mod health;
pub mod settings;

pub use forecast::*;
pub use health::*;
pub use settings::*;
