//! Dashboard Snapshot Module
//! One call computing every derived table behind a dashboard render.

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::debug;

use crate::analysis::{
    bottom_categories, payment_distribution, state_order_counts, top_categories, AnalysisError,
    CategoryCount, PaymentShare, RegionCount, RfmRecord, RfmTable,
};

/// Tuning knobs for a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisParams {
    pub top_n: usize,
    pub bottom_n: usize,
    pub rfm_top_k: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            top_n: 10,
            bottom_n: 10,
            rfm_top_k: 5,
        }
    }
}

/// Every derived table for one filtered order table.
///
/// Recomputed from scratch on each date-range change; nothing here is cached
/// or mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub top_categories: Vec<CategoryCount>,
    pub bottom_categories: Vec<CategoryCount>,
    pub payment_distribution: Vec<PaymentShare>,
    pub state_orders: Vec<RegionCount>,
    pub rfm: RfmTable,
    pub best_by_recency: Vec<RfmRecord>,
    pub best_by_frequency: Vec<RfmRecord>,
    pub best_by_monetary: Vec<RfmRecord>,
}

impl DashboardSnapshot {
    /// Compute all derived tables over one filtered table.
    ///
    /// The aggregations are independent and pure, so the RFM branch (the
    /// dominant cost) runs alongside the count tables; the output is
    /// identical to sequential evaluation.
    pub fn compute(df: &DataFrame, params: &AnalysisParams) -> Result<Self, AnalysisError> {
        let (rfm, counts) = rayon::join(
            || RfmTable::compute(df),
            || -> Result<_, AnalysisError> {
                Ok((
                    top_categories(df, params.top_n)?,
                    bottom_categories(df, params.bottom_n)?,
                    payment_distribution(df)?,
                    state_order_counts(df)?,
                ))
            },
        );
        let rfm = rfm?;
        let (top, bottom, payments, states) = counts?;

        debug!(
            customers = rfm.len(),
            categories = top.len(),
            states = states.len(),
            "dashboard snapshot computed"
        );

        Ok(Self {
            best_by_recency: rfm.top_by_recency(params.rfm_top_k),
            best_by_frequency: rfm.top_by_frequency(params.rfm_top_k),
            best_by_monetary: rfm.top_by_monetary(params.rfm_top_k),
            top_categories: top,
            bottom_categories: bottom,
            payment_distribution: payments,
            state_orders: states,
            rfm,
        })
    }
}
