pub mod error;
pub mod footprint;
pub mod forecast;
pub mod window;

pub use self::{
    error::CoreError,
    footprint::energy_to_carbon,
    forecast::ForecastPoint,
    window::{Selection, Window, select_top_windows},
};
