// src/pipeline/listing.rs

use crate::dataset::{Cell, Record, Table};
use url::Url;

pub const CARD_PLACEHOLDER: &str = "https://picsum.photos/300/200";
pub const BUNDLE_PLACEHOLDER: &str = "https://picsum.photos/400/250";

const NAME_LIMIT: usize = 40;

/// Display-ready projection of one listing row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub name: String,
    /// Always an absolute http(s) URL.
    pub thumbnail: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub beds: i64,
    pub rating: Option<f64>,
    pub reviews: i64,
    pub was_price: f64,
    pub price: f64,
    pub specification: Option<String>,
}

impl ListingCard {
    pub fn from_record(record: &Record<'_>, placeholder: &str) -> Self {
        let whole = |column: &str| record.get(column).as_f64().unwrap_or(0.0) as i64;

        Self {
            name: cell_string(record.get("name")),
            thumbnail: display_thumbnail(record.get("thumbnail_url"), placeholder),
            bedrooms: whole("bedrooms"),
            bathrooms: whole("bathrooms"),
            beds: whole("beds"),
            rating: record.get("review_scores_rating").as_f64(),
            reviews: whole("number_of_reviews"),
            was_price: price_of(record.get("was_price")),
            price: price_of(record.get("log_price")),
            specification: record.get("specification").as_text().map(str::to_string),
        }
    }

    /// Name cut to the card width.
    pub fn short_name(&self) -> String {
        self.name.chars().take(NAME_LIMIT).collect()
    }
}

/// Cards for every row of `table`, in order.
pub fn cards(table: &Table, placeholder: &str) -> Vec<ListingCard> {
    table
        .records()
        .map(|r| ListingCard::from_record(&r, placeholder))
        .collect()
}

/// The thumbnail when it is an absolute http(s) URL, otherwise `placeholder`.
pub fn display_thumbnail(cell: &Cell, placeholder: &str) -> String {
    cell.as_text()
        .filter(|raw| {
            Url::parse(raw)
                .map(|u| matches!(u.scheme(), "http" | "https"))
                .unwrap_or(false)
        })
        .unwrap_or(placeholder)
        .to_string()
}

/// Price coercion: anything non-numeric counts as 0.
pub fn price_of(cell: &Cell) -> f64 {
    cell.as_f64().unwrap_or(0.0)
}

fn cell_string(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Number(n) => n.to_string(),
        Cell::Date(d) => d.to_string(),
        Cell::Null => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_requires_absolute_http_url() {
        let ok = Cell::Text("https://cdn.example.com/a.jpg".into());
        assert_eq!(
            display_thumbnail(&ok, CARD_PLACEHOLDER),
            "https://cdn.example.com/a.jpg"
        );

        for bad in [
            Cell::Null,
            Cell::Text("images/local.jpg".into()),
            Cell::Text("/var/data/a.png".into()),
            Cell::Text("ftp://example.com/a.jpg".into()),
            Cell::Number(3.0),
        ] {
            assert_eq!(display_thumbnail(&bad, CARD_PLACEHOLDER), CARD_PLACEHOLDER);
        }
    }

    #[test]
    fn card_coerces_missing_values() {
        let t = Table::from_rows(
            vec![
                "name".into(),
                "bedrooms".into(),
                "was_price".into(),
                "log_price".into(),
            ],
            vec![vec![
                Cell::Text("A very long listing name that keeps going and going".into()),
                Cell::Number(2.7),
                Cell::Text("n/a".into()),
                Cell::Number(120.5),
            ]],
        );
        let card = ListingCard::from_record(&t.record(0).unwrap(), CARD_PLACEHOLDER);

        assert_eq!(card.bedrooms, 2);
        assert_eq!(card.bathrooms, 0);
        assert_eq!(card.was_price, 0.0);
        assert_eq!(card.price, 120.5);
        assert_eq!(card.rating, None);
        assert_eq!(card.thumbnail, CARD_PLACEHOLDER);
        assert_eq!(card.short_name().chars().count(), 40);
    }
}
