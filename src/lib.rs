//! Shopsight - E-Commerce Order Analytics Core
//!
//! Loads a flat order dataset, filters it to an inclusive calendar date
//! range, and computes the derived tables behind a sales dashboard: top and
//! bottom product categories, payment-method distribution, per-state order
//! counts, and RFM customer segmentation.
//!
//! The pipeline is a strict left-to-right fan-out — loader, date filter,
//! then independent pure aggregations — with the rendering of charts left to
//! an external presentation layer that consumes the flat records produced
//! here.

pub mod analysis;
pub mod dashboard;
pub mod data;

pub use dashboard::{AnalysisParams, DashboardSnapshot};
