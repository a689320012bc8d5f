//! Order Dataset Loader Module
//! Reads the flat order CSV into a DataFrame and parses timestamp columns.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::data::schema::{DATETIME_COLUMNS, PAYMENT_VALUE, REQUIRED_COLUMNS, TIMESTAMP_FORMAT};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),
}

/// Load the order dataset from a CSV file.
///
/// All rows and columns are kept intact; the designated timestamp columns are
/// parsed as `Datetime` and `payment_value` is coerced to `Float64`. A
/// timestamp cell that does not match the dataset layout becomes null; the
/// row itself is retained. A missing required column fails the load here
/// rather than surfacing later inside an aggregation.
pub fn load_orders(path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
    let path = path.as_ref();

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10_000))
        .finish()?
        .collect()?;

    for required in REQUIRED_COLUMNS {
        if !df.get_column_names().iter().any(|n| n.as_str() == required) {
            return Err(LoaderError::MissingColumn(required.to_string()));
        }
    }

    let parse_timestamps: Vec<Expr> = DATETIME_COLUMNS
        .iter()
        .map(|name| {
            col(*name)
                .str()
                .to_datetime(
                    Some(TimeUnit::Microseconds),
                    None,
                    StrptimeOptions {
                        format: Some(TIMESTAMP_FORMAT.into()),
                        strict: false,
                        exact: true,
                        cache: true,
                    },
                    lit("raise"),
                )
                .alias(*name)
        })
        .collect();

    let df = df
        .lazy()
        .with_columns(parse_timestamps)
        .with_column(col(PAYMENT_VALUE).cast(DataType::Float64))
        .collect()?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "order dataset loaded"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::{ORDER_APPROVED_AT, ORDER_PURCHASE_TS};
    use std::io::Write;

    const HEADER: &str = "order_id,customer_id,product_category_name,payment_type,payment_value,customer_state,order_purchase_timestamp,order_approved_at,order_delivered_carrier_date,order_delivered_customer_date,order_estimated_delivery_date,shipping_limit_date_y";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_rows_and_parses_timestamps() {
        let file = write_csv(&[
            "o1,c1,toys,credit_card,10.5,SP,2017-10-02 10:56:33,2017-10-02 11:07:15,2017-10-04 19:55:00,2017-10-10 21:25:13,2017-10-18 00:00:00,2017-10-06 11:07:15",
            "o2,c2,books,boleto,35.0,RJ,2017-11-18 19:28:06,2017-11-18 19:45:59,2017-11-22 13:39:59,2017-12-02 00:28:42,2017-12-15 00:00:00,2017-11-23 19:45:59",
        ]);

        let df = load_orders(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert!(matches!(
            df.column(ORDER_PURCHASE_TS).unwrap().dtype(),
            &DataType::Datetime(_, _)
        ));
        assert_eq!(
            df.column(PAYMENT_VALUE).unwrap().dtype(),
            &DataType::Float64
        );
    }

    #[test]
    fn unparseable_timestamp_becomes_null() {
        let file = write_csv(&[
            "o1,c1,toys,credit_card,10.5,SP,2017-10-02 10:56:33,not-a-date,2017-10-04 19:55:00,2017-10-10 21:25:13,2017-10-18 00:00:00,2017-10-06 11:07:15",
        ]);

        let df = load_orders(file.path()).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.column(ORDER_APPROVED_AT).unwrap().null_count(), 1);
        assert_eq!(df.column(ORDER_PURCHASE_TS).unwrap().null_count(), 0);
    }

    #[test]
    fn missing_required_column_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "order_id,customer_id").unwrap();
        writeln!(file, "o1,c1").unwrap();
        file.flush().unwrap();

        let err = load_orders(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(_)));
    }

    #[test]
    fn missing_file_fails() {
        assert!(load_orders("/nonexistent/orders.csv").is_err());
    }
}
