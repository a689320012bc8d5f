//! Data module - CSV loading and date-range filtering

mod filter;
mod loader;
pub mod schema;

pub use filter::{filter_by_date_range, observed_date_range, FilterError};
pub use loader::{load_orders, LoaderError};
