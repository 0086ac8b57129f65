// src/pipeline/selections.rs

use crate::dataset::Table;
use crate::pipeline::filters::CapacityMinimums;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub const NIGHT_STAY_MAX: u32 = 30;
const DEFAULT_NIGHT_STAY: u32 = 3;

/// The fixed nearby-attraction vocabulary, unsorted.
pub const ACTIVITY_OPTIONS: &[&str] = &[
    "Near Airport", "Near Art Alley", "Near Art Gallery", "Near Art Lane", "Near Art Market",
    "Near Art Street", "Near Artisan Market", "Near Beach", "Near Beach Walk", "Near Beachfront",
    "Near Botanical Garden", "Near Boutique Street", "Near Business District", "Near Business Hub",
    "Near Camping Spot", "Near Central Park", "Near City Center", "Near City Market",
    "Near City Museum", "Near Cliff Trail", "Near Cliff View", "Near Cliff Viewpoint",
    "Near Coastal Boardwalk", "Near Coffee Quarter", "Near Concert Arena", "Near Convention Hall",
    "Near Creative District", "Near Creative Hub", "Near Cultural Market", "Near Cultural Village",
    "Near Downtown", "Near Downtown Street", "Near Food Street", "Near Forest Edge",
    "Near Forest Reserve", "Near Forest Retreat", "Near Forest Trail", "Near Golf Course",
    "Near Golf Park", "Near Harbor View", "Near Harbor Walk", "Near Harborfront",
    "Near Heritage District", "Near Heritage Town", "Near Hiking Trail", "Near Hilltop Café",
    "Near Historical Museum", "Near Lake Garden", "Near Lake Trail", "Near Lakefront",
    "Near Lakeside Pavilion", "Near Lookout Point", "Near Marina Bay", "Near Marina Pier",
    "Near Market", "Near Mountain Peak", "Near Mountain Trail", "Near Mountain Valley",
    "Near Mountain View", "Near National Park", "Near Nature Reserve", "Near Night Bazaar",
    "Near Night Street", "Near Nightlife Area", "Near Ocean Breeze Point", "Near Ocean Point",
    "Near Ocean Viewpoint", "Near Oceanfront", "Near Old Town", "Near Open Air Café",
    "Near Park District", "Near Pedestrian Bridge", "Near Picnic Ground", "Near Rice Terrace",
    "Near River View", "Near Riverbank", "Near Riverbank Trail", "Near Riverbank Walk",
    "Near Riverside Café", "Near Riverside Garden", "Near Riverside Lodge", "Near Riverside Walk",
    "Near Riverwalk", "Near Rooftop Bar", "Near Scenic Park", "Near Seafood Market",
    "Near Shopping Avenue", "Near Shopping District", "Near Shopping Mall",
    "Near Shopping Promenade", "Near Shopping Street", "Near Surf Spot", "Near Sunset Bar",
    "Near Sunset Point", "Near Sunset View", "Near Stadium", "Near Temple",
    "Near Temple Courtyard", "Near Train Station", "Near Urban Park", "Near Valley View",
    "Near Village Café", "Near Village View", "Near Village Walk", "Near Waterfall View",
];

/// Activity keywords in display order.
pub fn sorted_activities() -> Vec<&'static str> {
    let mut options = ACTIVITY_OPTIONS.to_vec();
    options.sort_unstable();
    options
}

pub fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 25).unwrap_or(NaiveDate::MIN)
}

/// Choices offered for each capacity minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityOptions {
    pub bedrooms: Vec<i64>,
    pub bathrooms: Vec<i64>,
    pub beds: Vec<i64>,
}

impl CapacityOptions {
    pub fn from_table(table: &Table) -> Self {
        Self {
            bedrooms: distinct_whole_values(table, "bedrooms", &[1, 2, 3]),
            bathrooms: distinct_whole_values(table, "bathrooms", &[1, 2, 3]),
            beds: distinct_whole_values(table, "beds", &[1, 2, 3, 4]),
        }
    }
}

/// Sorted distinct values of `column` truncated to integers, or `fallback`
/// when the column is absent or holds no numbers.
fn distinct_whole_values(table: &Table, column: &str, fallback: &[i64]) -> Vec<i64> {
    let values: BTreeSet<i64> = table
        .column_values(column)
        .filter_map(|c| c.as_f64())
        .map(|v| v as i64)
        .collect();

    if values.is_empty() {
        fallback.to_vec()
    } else {
        values.into_iter().collect()
    }
}

/// Everything the traveler picked on the search form.
#[derive(Debug, Clone, PartialEq)]
pub struct Selections {
    pub date: NaiveDate,
    pub night_stay: u32,
    pub capacity: CapacityMinimums,
    /// Property type chosen explicitly; `None` means use the first available.
    pub property_type: Option<String>,
    pub activities: Vec<String>,
}

impl Selections {
    /// Defaults: the fixed travel date and the smallest offered minimums.
    pub fn defaults(options: &CapacityOptions) -> Self {
        let first = |v: &[i64]| v.first().copied().unwrap_or(0);
        Self {
            date: default_date(),
            night_stay: DEFAULT_NIGHT_STAY,
            capacity: CapacityMinimums {
                bedrooms: first(&options.bedrooms),
                bathrooms: first(&options.bathrooms),
                beds: first(&options.beds),
            },
            property_type: None,
            activities: Vec::new(),
        }
    }

    /// Read selections from decoded query pairs. Values that fail to parse keep
    /// their default; `activity` may repeat.
    pub fn from_pairs<'a, I>(pairs: I, options: &CapacityOptions) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut s = Self::defaults(options);

        for (key, value) in pairs {
            let value = value.trim();
            match key {
                "date" => {
                    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                        s.date = d;
                    }
                }
                "night_stay" => {
                    if let Ok(n) = value.parse::<u32>() {
                        s.night_stay = n.clamp(1, NIGHT_STAY_MAX);
                    }
                }
                "bedrooms" => set_whole(&mut s.capacity.bedrooms, value),
                "bathrooms" => set_whole(&mut s.capacity.bathrooms, value),
                "beds" => set_whole(&mut s.capacity.beds, value),
                "property_type" if !value.is_empty() => {
                    s.property_type = Some(value.to_string());
                }
                "activity" if !value.is_empty() => {
                    if !s.activities.iter().any(|a| a == value) {
                        s.activities.push(value.to_string());
                    }
                }
                _ => {}
            }
        }

        s
    }
}

fn set_whole(slot: &mut i64, raw: &str) {
    if let Ok(v) = raw.parse::<f64>() {
        if v.is_finite() {
            *slot = v as i64;
        }
    }
}
