// src/pipeline/filters.rs
//
// Each filter returns a narrowed copy of its input and is a no-op when the
// column it reads is absent.

use crate::dataset::Table;
use chrono::NaiveDate;

/// Spellings that all refer to the same country in listing exports.
const COUNTRY_ALIASES: &[&[&str]] = &[&["USA", "United States", "America"]];

/// Traveler-chosen minimums for the capacity columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityMinimums {
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub beds: i64,
}

/// Rows available on or before `date`. Unparsable dates never qualify.
pub fn available_by(table: &Table, date: NaiveDate) -> Table {
    if !table.has_column("available_date") {
        return table.clone();
    }
    table.filtered(|r| matches!(r.get("available_date").as_date(), Some(d) if d <= date))
}

/// Rows whose `column` is at least `minimum`, reading nulls as 0.
pub fn at_least(table: &Table, column: &str, minimum: i64) -> Table {
    if !table.has_column(column) {
        return table.clone();
    }
    let minimum = minimum as f64;
    table.filtered(|r| r.get(column).as_f64().unwrap_or(0.0) >= minimum)
}

/// Apply the bedrooms, bathrooms and beds minimums in turn.
pub fn with_capacity(table: &Table, min: CapacityMinimums) -> Table {
    let t = at_least(table, "bedrooms", min.bedrooms);
    let t = at_least(&t, "bathrooms", min.bathrooms);
    at_least(&t, "beds", min.beds)
}

/// Lower-cased substrings accepted for `target`.
pub fn country_aliases(target: &str) -> Vec<String> {
    COUNTRY_ALIASES
        .iter()
        .find(|group| group.iter().any(|a| a.eq_ignore_ascii_case(target)))
        .map(|group| group.iter().map(|a| a.to_lowercase()).collect())
        .unwrap_or_else(|| vec![target.to_lowercase()])
}

/// Rows whose `country` contains any alias of `target`, case-insensitively.
/// When nothing matches, the input is returned unfiltered.
pub fn in_country(table: &Table, target: &str) -> Table {
    if !table.has_column("country") {
        return table.clone();
    }

    let aliases = country_aliases(target);
    let matched = table.filtered(|r| {
        r.get("country")
            .as_text()
            .map(str::to_lowercase)
            .is_some_and(|c| aliases.iter().any(|a| c.contains(a.as_str())))
    });

    if matched.is_empty() {
        tracing::debug!("no listings match country {target}, keeping all {}", table.len());
        return table.clone();
    }
    matched
}

/// Rows whose `property_type` equals `property_type` exactly.
pub fn of_property_type(table: &Table, property_type: &str) -> Table {
    if !table.has_column("property_type") {
        return table.clone();
    }
    table.filtered(|r| r.get("property_type").as_text() == Some(property_type))
}

/// Rows whose `specification` mentions every keyword, case-insensitively.
///
/// A single keyword is a plain substring match; several keywords must all
/// appear in the same description. No keywords keeps every row.
pub fn near_activities(table: &Table, keywords: &[String]) -> Table {
    if keywords.is_empty() || !table.has_column("specification") {
        return table.clone();
    }

    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    table.filtered(|r| {
        let description = r
            .get("specification")
            .as_text()
            .unwrap_or_default()
            .to_lowercase();
        keywords.iter().all(|k| description.contains(k.as_str()))
    })
}
