// src/dataset/table.rs

use chrono::{NaiveDate, NaiveDateTime};

static NULL_CELL: Cell = Cell::Null;

/// A single value of the listings table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl Cell {
    /// Numeric view of the cell. Text is coerced when it parses; NaN counts as missing.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Null | Cell::Date(_) => return None,
        };
        (!value.is_nan()).then_some(value)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Date view of the cell. Unparsable text coerces to `None`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            Cell::Text(s) => parse_date(s),
            _ => None,
        }
    }
}

/// Parse the date layouts seen in listing exports.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

pub type Row = Vec<Cell>;

/// Row-oriented listings table. Every row has exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Append a row, padding with nulls or truncating to the column count.
    pub fn push_row(&mut self, mut row: Row) {
        row.resize(self.columns.len(), Cell::Null);
        self.rows.push(row);
    }

    /// Append a column filled with `fill` on every existing row.
    pub fn push_column(&mut self, name: &str, fill: Cell) {
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(fill.clone());
        }
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |row| Record { table: self, row })
    }

    /// Cells of a named column, top to bottom. Empty when the column is absent.
    pub fn column_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Cell> + 'a {
        let index = self.column_index(name);
        self.rows
            .iter()
            .filter_map(move |row| index.map(|i| &row[i]))
    }

    /// New table with the same schema holding only the rows that pass `keep`.
    pub fn filtered<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Record<'_>) -> bool,
    {
        let rows = self
            .records()
            .filter(|r| keep(r))
            .map(|r| r.row.clone())
            .collect();
        self.with_rows(rows)
    }

    /// New table with the same schema and the given rows.
    pub fn with_rows(&self, rows: Vec<Row>) -> Table {
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }
}

#[cfg(test)]
impl Table {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|row| Record { table: self, row })
    }
}

/// Borrowed view of one row with name-based access.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    row: &'a Row,
}

impl<'a> Record<'a> {
    /// Cell for `column`, or null when the table has no such column.
    pub fn get(&self, column: &str) -> &'a Cell {
        self.table
            .column_index(column)
            .map(|i| &self.row[i])
            .unwrap_or(&NULL_CELL)
    }

    pub fn row(&self) -> &'a Row {
        self.row
    }
}
