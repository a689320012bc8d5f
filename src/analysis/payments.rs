//! Payment Distribution Module
//! Share of orders per payment method.

use polars::prelude::*;
use serde::Serialize;

use crate::analysis::AnalysisError;
use crate::data::schema::PAYMENT_TYPE;

const COUNT: &str = "count";

/// Fraction of all counted orders paid with one payment method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentShare {
    pub payment_type: String,
    pub share: f64,
}

/// Share of the filtered table per payment type, descending by share.
///
/// Rows with a null payment type are excluded from both the counts and the
/// denominator, so the emitted shares sum to 1.0 for any non-empty input.
/// Equal shares order lexicographically by label.
pub fn payment_distribution(df: &DataFrame) -> Result<Vec<PaymentShare>, AnalysisError> {
    let counts = df
        .clone()
        .lazy()
        .filter(col(PAYMENT_TYPE).is_not_null())
        .group_by([col(PAYMENT_TYPE)])
        .agg([len().alias(COUNT)])
        .collect()?;

    let labels = counts.column(PAYMENT_TYPE)?.str()?;
    let tallies = counts.column(COUNT)?.u32()?;

    let mut rows: Vec<(String, u32)> = Vec::with_capacity(counts.height());
    for i in 0..counts.height() {
        if let (Some(label), Some(tally)) = (labels.get(i), tallies.get(i)) {
            rows.push((label.to_string(), tally));
        }
    }

    let total: u64 = rows.iter().map(|(_, tally)| u64::from(*tally)).sum();
    if total == 0 {
        return Ok(Vec::new());
    }

    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(rows
        .into_iter()
        .map(|(payment_type, tally)| PaymentShare {
            payment_type,
            share: f64::from(tally) / total as f64,
        })
        .collect())
}
