//! Category Ranking Module
//! Best- and worst-selling product categories by order count.

use polars::prelude::*;
use serde::Serialize;

use crate::analysis::AnalysisError;
use crate::data::schema::PRODUCT_CATEGORY;

const TOTAL_ORDERS: &str = "total_orders";

/// Order count for a single product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub total_orders: u32,
}

/// Count rows per category. Null category labels are not a category.
fn category_counts(df: &DataFrame) -> Result<Vec<CategoryCount>, AnalysisError> {
    let counts = df
        .clone()
        .lazy()
        .filter(col(PRODUCT_CATEGORY).is_not_null())
        .group_by([col(PRODUCT_CATEGORY)])
        .agg([len().alias(TOTAL_ORDERS)])
        .collect()?;

    let labels = counts.column(PRODUCT_CATEGORY)?.str()?;
    let totals = counts.column(TOTAL_ORDERS)?.u32()?;

    let mut out = Vec::with_capacity(counts.height());
    for i in 0..counts.height() {
        if let (Some(label), Some(total)) = (labels.get(i), totals.get(i)) {
            out.push(CategoryCount {
                category: label.to_string(),
                total_orders: total,
            });
        }
    }
    Ok(out)
}

/// The `n` most-ordered categories, descending by count.
///
/// Equal counts order lexicographically by label, so repeated calls on the
/// same table return the same ranking. Fewer than `n` distinct categories
/// returns all of them.
pub fn top_categories(df: &DataFrame, n: usize) -> Result<Vec<CategoryCount>, AnalysisError> {
    let mut counts = category_counts(df)?;
    counts.sort_by(|a, b| {
        b.total_orders
            .cmp(&a.total_orders)
            .then_with(|| a.category.cmp(&b.category))
    });
    counts.truncate(n);
    Ok(counts)
}

/// The `n` least-ordered categories, ascending by count, same tie-break
/// discipline as [`top_categories`].
pub fn bottom_categories(df: &DataFrame, n: usize) -> Result<Vec<CategoryCount>, AnalysisError> {
    let mut counts = category_counts(df)?;
    counts.sort_by(|a, b| {
        a.total_orders
            .cmp(&b.total_orders)
            .then_with(|| a.category.cmp(&b.category))
    });
    counts.truncate(n);
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories_df(labels: &[Option<&str>]) -> DataFrame {
        df!(PRODUCT_CATEGORY => labels).unwrap()
    }

    #[test]
    fn ranks_top_and_bottom_with_deterministic_ties() {
        // electronics: 5, books: 2, toys: 2
        let df = categories_df(&[
            Some("electronics"),
            Some("electronics"),
            Some("electronics"),
            Some("electronics"),
            Some("electronics"),
            Some("books"),
            Some("books"),
            Some("toys"),
            Some("toys"),
        ]);

        let top = top_categories(&df, 1).unwrap();
        assert_eq!(
            top,
            vec![CategoryCount {
                category: "electronics".to_string(),
                total_orders: 5
            }]
        );

        let bottom = bottom_categories(&df, 2).unwrap();
        assert_eq!(bottom.len(), 2);
        assert_eq!(bottom[0].category, "books");
        assert_eq!(bottom[1].category, "toys");
        assert_eq!(bottom[0].total_orders, 2);
        assert_eq!(bottom[1].total_orders, 2);
    }

    #[test]
    fn top_counts_dominate_bottom_counts() {
        let df = categories_df(&[
            Some("a"),
            Some("a"),
            Some("a"),
            Some("b"),
            Some("b"),
            Some("c"),
        ]);

        let top = top_categories(&df, 1).unwrap();
        let bottom = bottom_categories(&df, 1).unwrap();
        assert!(top[0].total_orders >= bottom[0].total_orders);
        assert_ne!(top[0].category, bottom[0].category);
    }

    #[test]
    fn fewer_distinct_categories_than_n_returns_all() {
        let df = categories_df(&[Some("a"), Some("b")]);
        assert_eq!(top_categories(&df, 10).unwrap().len(), 2);
        assert_eq!(bottom_categories(&df, 10).unwrap().len(), 2);
    }

    #[test]
    fn null_labels_are_skipped() {
        let df = categories_df(&[Some("a"), None, None]);
        let top = top_categories(&df, 10).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].category, "a");
        assert_eq!(top[0].total_orders, 1);
    }

    #[test]
    fn empty_table_yields_empty_ranking() {
        let df = categories_df(&[]);
        assert!(top_categories(&df, 10).unwrap().is_empty());
        assert!(bottom_categories(&df, 10).unwrap().is_empty());
    }

    #[test]
    fn ranking_is_idempotent() {
        let df = categories_df(&[Some("a"), Some("b"), Some("b")]);
        assert_eq!(
            top_categories(&df, 10).unwrap(),
            top_categories(&df, 10).unwrap()
        );
    }
}
