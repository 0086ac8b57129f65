// src/dataset/sample.rs

use crate::dataset::table::{Cell, Table};
use rand::Rng;

const SAMPLE_ROWS: usize = 10;

const SAMPLE_COUNTRIES: [&str; SAMPLE_ROWS] = [
    "USA",
    "Indonesia",
    "USA",
    "France",
    "USA",
    "Japan",
    "Indonesia",
    "USA",
    "Spain",
    "USA",
];

const SAMPLE_PROPERTY_TYPES: [&str; SAMPLE_ROWS] = [
    "Apartment",
    "House",
    "Apartment",
    "B&B",
    "Apartment",
    "Villa",
    "Apartment",
    "Hostel",
    "House",
    "Resort",
];

/// Small stand-in table used when the dataset file is absent.
/// The first row has no thumbnail and no original price.
pub fn synthetic_table<R: Rng + ?Sized>(rng: &mut R) -> Table {
    let columns = [
        "id",
        "name",
        "thumbnail_url",
        "review_scores_rating",
        "number_of_reviews",
        "was_price",
        "log_price",
        "country",
        "property_type",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    let rows = (0..SAMPLE_ROWS)
        .map(|i| {
            let n = i + 1;
            let (thumbnail, was_price) = if i == 0 {
                (Cell::Null, Cell::Null)
            } else {
                (
                    Cell::Text(format!("https://picsum.photos/seed/{i}/600/400")),
                    Cell::Number(rng.gen_range(50..500) as f64),
                )
            };

            vec![
                Cell::Number(n as f64),
                Cell::Text(format!("Hotel {n}")),
                thumbnail,
                Cell::Number(rng.gen_range(60..100) as f64),
                Cell::Number(rng.gen_range(0..500) as f64),
                was_price,
                Cell::Number(rng.gen_range(30.0..400.0)),
                Cell::Text(SAMPLE_COUNTRIES[i].to_string()),
                Cell::Text(SAMPLE_PROPERTY_TYPES[i].to_string()),
            ]
        })
        .collect();

    Table::from_rows(columns, rows)
}
