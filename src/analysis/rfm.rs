//! RFM Segmentation Module
//! Recency/Frequency/Monetary scoring per customer.

use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::analysis::AnalysisError;
use crate::data::schema::{CUSTOMER_ID, ORDER_ID, ORDER_PURCHASE_TS, PAYMENT_VALUE};

const LAST_PURCHASE: &str = "last_purchase";
const FREQUENCY: &str = "frequency";
const MONETARY: &str = "monetary";

/// RFM scores for a single customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfmRecord {
    pub customer_id: String,
    /// Whole days between the filtered table's most recent purchase date and
    /// this customer's own most recent purchase date. The customer who
    /// transacted last has recency 0.
    pub recency_days: i64,
    /// Distinct order identifiers attributed to the customer. Distinct-order
    /// counting (not raw rows) keeps multi-item and multi-installment orders
    /// from counting twice.
    pub frequency: u32,
    /// Sum of the customer's payment values.
    pub monetary: f64,
}

/// RFM scores for every customer present in the filtered table.
///
/// Customers with no rows after filtering are absent, not zero-valued.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RfmTable {
    records: Vec<RfmRecord>,
}

impl RfmTable {
    /// Group the filtered table by customer and derive the three scores.
    ///
    /// Rows with a null customer id or a null purchase timestamp are skipped.
    /// Recency compares calendar dates, not clock times, so two purchases on
    /// the same day are zero days apart.
    pub fn compute(df: &DataFrame) -> Result<Self, AnalysisError> {
        let per_customer = df
            .clone()
            .lazy()
            .filter(
                col(CUSTOMER_ID)
                    .is_not_null()
                    .and(col(ORDER_PURCHASE_TS).is_not_null()),
            )
            .group_by([col(CUSTOMER_ID)])
            .agg([
                col(ORDER_PURCHASE_TS).dt().date().max().alias(LAST_PURCHASE),
                col(ORDER_ID).n_unique().alias(FREQUENCY),
                col(PAYMENT_VALUE).sum().alias(MONETARY),
            ])
            .collect()?;

        let customers = per_customer.column(CUSTOMER_ID)?.str()?;
        let last_purchases: Vec<Option<NaiveDate>> = per_customer
            .column(LAST_PURCHASE)?
            .date()?
            .as_date_iter()
            .collect();
        let frequencies = per_customer.column(FREQUENCY)?.u32()?;
        let monetary = per_customer.column(MONETARY)?.f64()?;

        // Every customer's last purchase is on or before the table-wide
        // maximum, so recency is never negative.
        let Some(recent_date) = last_purchases.iter().flatten().max().copied() else {
            return Ok(Self::default());
        };

        let mut records = Vec::with_capacity(per_customer.height());
        for i in 0..per_customer.height() {
            let (Some(customer), Some(last_purchase)) = (customers.get(i), last_purchases[i])
            else {
                continue;
            };
            let Some(frequency) = frequencies.get(i) else {
                continue;
            };
            records.push(RfmRecord {
                customer_id: customer.to_string(),
                recency_days: recent_date.signed_duration_since(last_purchase).num_days(),
                frequency,
                monetary: monetary.get(i).unwrap_or(0.0),
            });
        }
        records.sort_by(|a, b| a.customer_id.cmp(&b.customer_id));

        Ok(Self { records })
    }

    pub fn records(&self) -> &[RfmRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `k` customers who purchased most recently (smallest recency).
    pub fn top_by_recency(&self, k: usize) -> Vec<RfmRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| {
            a.recency_days
                .cmp(&b.recency_days)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        records.truncate(k);
        records
    }

    /// The `k` customers with the most distinct orders.
    pub fn top_by_frequency(&self, k: usize) -> Vec<RfmRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        records.truncate(k);
        records
    }

    /// The `k` customers who spent the most.
    pub fn top_by_monetary(&self, k: usize) -> Vec<RfmRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| {
            b.monetary
                .partial_cmp(&a.monetary)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        records.truncate(k);
        records
    }
}
