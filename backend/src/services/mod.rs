//! Business logic services for the Rx Burn Weather Planner

pub mod export;
pub mod forecast;
pub mod settings;

pub use export::export_to_csv;
pub use forecast::ForecastService;
pub use settings::SettingsService;
