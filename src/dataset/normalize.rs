// src/dataset/normalize.rs

use crate::dataset::table::{Cell, Table};

/// Copy of `table` guaranteed to expose every column in `required`.
/// Missing columns are appended as all-null; existing columns keep their
/// values and order.
pub fn ensure_columns(table: &Table, required: &[&str]) -> Table {
    let mut out = table.clone();
    for name in required {
        if !out.has_column(name) {
            out.push_column(name, Cell::Null);
        }
    }
    out
}
