// src/pipeline/bundle.rs

use crate::dataset::{Record, Table};
use crate::pipeline::listing::{price_of, ListingCard, BUNDLE_PLACEHOLDER};
use rand::seq::index;
use rand::Rng;
use std::cmp::Ordering;

/// Deals shown in the special-offers panel.
pub const MAX_BUNDLES: usize = 3;

/// Rows drawn from the full table when geographic pairing comes up short.
const FALLBACK_SAMPLE: usize = 6;

/// Combined pricing for a two-listing package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundlePricing {
    pub first_was: f64,
    pub second_was: f64,
    pub total_was: f64,
    pub total_now: f64,
    /// Not clamped: negative when the package costs more than the originals.
    pub discount_pct: f64,
}

impl BundlePricing {
    pub fn new(first: &Record<'_>, second: &Record<'_>) -> Self {
        let first_was = price_of(first.get("was_price"));
        let second_was = price_of(second.get("was_price"));
        let total_was = first_was + second_was;
        let total_now = price_of(first.get("log_price")) + price_of(second.get("log_price"));

        let discount_pct = if total_was > 0.0 {
            (1.0 - total_now / total_was) * 100.0
        } else {
            0.0
        };

        Self {
            first_was,
            second_was,
            total_was,
            total_now,
            discount_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub first: ListingCard,
    pub second: ListingCard,
    pub pricing: BundlePricing,
}

/// Build up to [`MAX_BUNDLES`] package deals from `table`.
///
/// Rows (optionally limited to one property type, compared case-insensitively)
/// are sorted by latitude then longitude and paired with their neighbour. If that
/// gives fewer than three pairs, pairs are drawn instead from a random sample of
/// the whole table. The returned deals are a random pick from the pairs.
pub fn package_deals<R: Rng + ?Sized>(
    table: &Table,
    property_type: Option<&str>,
    rng: &mut R,
) -> Vec<Bundle> {
    let records: Vec<Record<'_>> = table.records().collect();

    let mut subset: Vec<Record<'_>> = match property_type {
        Some(wanted) => {
            let wanted = wanted.to_lowercase();
            records
                .iter()
                .copied()
                .filter(|r| {
                    r.get("property_type")
                        .as_text()
                        .is_some_and(|t| t.to_lowercase() == wanted)
                })
                .collect()
        }
        None => records.clone(),
    };

    let mut pairs = if subset.len() >= 2 {
        subset.sort_by(|a, b| {
            ascending(a.get("latitude").as_f64(), b.get("latitude").as_f64()).then_with(|| {
                ascending(a.get("longitude").as_f64(), b.get("longitude").as_f64())
            })
        });
        consecutive_pairs(&subset)
    } else {
        Vec::new()
    };

    if pairs.len() < MAX_BUNDLES {
        tracing::debug!(
            "only {} neighbouring pairs, sampling from {} listings",
            pairs.len(),
            records.len()
        );
        let amount = FALLBACK_SAMPLE.min(records.len());
        let sampled: Vec<Record<'_>> = index::sample(rng, records.len(), amount)
            .into_iter()
            .map(|i| records[i])
            .collect();
        pairs = consecutive_pairs(&sampled);
    }

    let picks = MAX_BUNDLES.min(pairs.len());
    index::sample(rng, pairs.len(), picks)
        .into_iter()
        .map(|i| {
            let (first, second) = pairs[i];
            Bundle {
                first: ListingCard::from_record(&first, BUNDLE_PLACEHOLDER),
                second: ListingCard::from_record(&second, BUNDLE_PLACEHOLDER),
                pricing: BundlePricing::new(&first, &second),
            }
        })
        .collect()
}

/// (0,1), (2,3), ...; an odd trailing row is dropped.
fn consecutive_pairs<'a>(rows: &[Record<'a>]) -> Vec<(Record<'a>, Record<'a>)> {
    rows.chunks_exact(2).map(|c| (c[0], c[1])).collect()
}

fn ascending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
