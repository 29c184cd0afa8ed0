//! Shared types and forecast evaluation engine for the Rx Burn Weather Planner
//!
//! This crate contains the forecast normalization and prescription evaluation
//! engine together with the types shared between the backend, the browser
//! (via WASM), and other components of the system.

pub mod engine;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
