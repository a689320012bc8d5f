//! Shopsight - E-Commerce Order Analytics
//!
//! Headless "run the dashboard" entry point: load the order dataset, compute
//! the snapshot over the full observed date range, print every derived table.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use shopsight::data::{filter_by_date_range, load_orders, observed_date_range, schema};
use shopsight::{AnalysisParams, DashboardSnapshot};

const DEFAULT_DATASET: &str = "all_df.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET.to_string());

    let orders =
        load_orders(&path).with_context(|| format!("loading order dataset from {path}"))?;

    let Some((start, end)) = observed_date_range(&orders, schema::ORDER_APPROVED_AT)? else {
        println!("Dataset has no approved orders; nothing to report.");
        return Ok(());
    };

    let filtered = filter_by_date_range(&orders, schema::ORDER_APPROVED_AT, start, end)?;
    let snapshot = DashboardSnapshot::compute(&filtered, &AnalysisParams::default())?;

    print_snapshot(&snapshot, start, end);
    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot, start: NaiveDate, end: NaiveDate) {
    println!("E-Commerce Order Dashboard ({start} to {end})");

    println!("\nMost ordered categories:");
    for c in &snapshot.top_categories {
        println!("  {:<40} {:>8}", c.category, c.total_orders);
    }

    println!("\nLeast ordered categories:");
    for c in &snapshot.bottom_categories {
        println!("  {:<40} {:>8}", c.category, c.total_orders);
    }

    println!("\nPayment methods:");
    for p in &snapshot.payment_distribution {
        println!("  {:<40} {:>7.1}%", p.payment_type, p.share * 100.0);
    }

    println!("\nOrders per state:");
    let mut states = snapshot.state_orders.clone();
    states.sort_by(|a, b| b.total_orders.cmp(&a.total_orders).then_with(|| a.state.cmp(&b.state)));
    for s in &states {
        println!("  {:<40} {:>8}", s.state, s.total_orders);
    }

    println!("\nBest customers by recency (days):");
    for r in &snapshot.best_by_recency {
        println!("  {:<40} {:>8}", r.customer_id, r.recency_days);
    }

    println!("\nBest customers by frequency (orders):");
    for r in &snapshot.best_by_frequency {
        println!("  {:<40} {:>8}", r.customer_id, r.frequency);
    }

    println!("\nBest customers by monetary value:");
    for r in &snapshot.best_by_monetary {
        println!("  {:<40} {:>12.2}", r.customer_id, r.monetary);
    }
}
