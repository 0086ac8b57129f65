// src/pipeline/rank.rs

use crate::dataset::{Record, Table};
use std::cmp::Ordering;

/// Listings shown per ranked panel.
pub const TOP_N: usize = 5;

/// The `n` best-rated rows: rating descending, then review count descending.
/// Sorting is stable, so rows tied on both keys keep their input order.
/// Missing ratings or review counts sort last.
pub fn top_rated(table: &Table, n: usize) -> Table {
    let mut records: Vec<Record<'_>> = table.records().collect();

    records.sort_by(|a, b| {
        descending(
            a.get("review_scores_rating").as_f64(),
            b.get("review_scores_rating").as_f64(),
        )
        .then_with(|| {
            descending(
                a.get("number_of_reviews").as_f64(),
                b.get("number_of_reviews").as_f64(),
            )
        })
    });

    let rows = records
        .into_iter()
        .take(n)
        .map(|r| r.row().clone())
        .collect();
    table.with_rows(rows)
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
