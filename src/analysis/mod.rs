//! Analysis module - aggregations over the filtered order table
//!
//! Each function is pure: it reads an immutable `DataFrame` and produces a
//! small derived table as flat records, recomputed on every call. An empty
//! input yields empty output, never an error.

mod categories;
mod payments;
mod regions;
mod rfm;

pub use categories::{bottom_categories, top_categories, CategoryCount};
pub use payments::{payment_distribution, PaymentShare};
pub use regions::{state_order_counts, RegionCount};
pub use rfm::{RfmRecord, RfmTable};

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}
