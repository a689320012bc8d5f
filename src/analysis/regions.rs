//! Regional Order Counts Module
//! Order volume per customer state.

use polars::prelude::*;
use serde::Serialize;

use crate::analysis::AnalysisError;
use crate::data::schema::CUSTOMER_STATE;

const TOTAL_ORDERS: &str = "total_orders";

/// Order count for a single customer state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub state: String,
    pub total_orders: u32,
}

/// Count rows per customer state; every row counts once, even when an order
/// identifier repeats across items or installments.
///
/// The result covers every state present and is ordered by state label only;
/// display ordering (e.g. descending by count) is the caller's choice. Null
/// states are skipped.
pub fn state_order_counts(df: &DataFrame) -> Result<Vec<RegionCount>, AnalysisError> {
    let counts = df
        .clone()
        .lazy()
        .filter(col(CUSTOMER_STATE).is_not_null())
        .group_by([col(CUSTOMER_STATE)])
        .agg([len().alias(TOTAL_ORDERS)])
        .collect()?;

    let labels = counts.column(CUSTOMER_STATE)?.str()?;
    let totals = counts.column(TOTAL_ORDERS)?.u32()?;

    let mut out = Vec::with_capacity(counts.height());
    for i in 0..counts.height() {
        if let (Some(label), Some(total)) = (labels.get(i), totals.get(i)) {
            out.push(RegionCount {
                state: label.to_string(),
                total_orders: total,
            });
        }
    }
    out.sort_by(|a, b| a.state.cmp(&b.state));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_row_per_state() {
        let df = df!(CUSTOMER_STATE => &[Some("SP"), Some("SP"), Some("RJ"), None]).unwrap();

        let counts = state_order_counts(&df).unwrap();
        assert_eq!(
            counts,
            vec![
                RegionCount {
                    state: "RJ".to_string(),
                    total_orders: 1
                },
                RegionCount {
                    state: "SP".to_string(),
                    total_orders: 2
                },
            ]
        );
    }

    #[test]
    fn empty_table_yields_zero_regions() {
        let empty: &[Option<&str>] = &[];
        let df = df!(CUSTOMER_STATE => empty).unwrap();
        assert!(state_order_counts(&df).unwrap().is_empty());
    }
}
