//! Date-Range Filter Module
//! Restricts the order table to an inclusive calendar-date interval.

use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Minimum and maximum calendar dates observed in a timestamp column,
/// ignoring nulls. `None` when the column is empty or all-null.
///
/// These bounds are the caller's default filter range, which makes the
/// default filter a no-op.
pub fn observed_date_range(
    df: &DataFrame,
    column: &str,
) -> Result<Option<(NaiveDate, NaiveDate)>, FilterError> {
    let bounds = df
        .clone()
        .lazy()
        .select([
            col(column).dt().date().min().alias("min_date"),
            col(column).dt().date().max().alias("max_date"),
        ])
        .collect()?;

    let min = bounds
        .column("min_date")?
        .date()?
        .as_date_iter()
        .next()
        .flatten();
    let max = bounds
        .column("max_date")?
        .date()?
        .as_date_iter()
        .next()
        .flatten();

    Ok(min.zip(max))
}

/// Keep the rows whose `column` date component lies in `[start, end]`.
///
/// The interval is closed on both ends, so `start == end` is a valid
/// single-day filter. `start > end` is rejected rather than swapped. Rows
/// with a null value in `column` are excluded.
pub fn filter_by_date_range(
    df: &DataFrame,
    column: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<DataFrame, FilterError> {
    if start > end {
        return Err(FilterError::InvalidDateRange { start, end });
    }

    let filtered = df
        .clone()
        .lazy()
        .filter(
            col(column)
                .is_not_null()
                .and(col(column).dt().date().gt_eq(lit(start)))
                .and(col(column).dt().date().lt_eq(lit(end))),
        )
        .collect()?;

    debug!(
        column,
        %start,
        %end,
        retained = filtered.height(),
        total = df.height(),
        "date-range filter applied"
    );

    Ok(filtered)
}
