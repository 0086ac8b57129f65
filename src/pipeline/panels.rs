// src/pipeline/panels.rs

use crate::dataset::{ensure_columns, Table};
use crate::pipeline::bundle::{package_deals, Bundle};
use crate::pipeline::filters::{
    available_by, in_country, near_activities, of_property_type, with_capacity,
};
use crate::pipeline::listing::{cards, ListingCard, CARD_PLACEHOLDER};
use crate::pipeline::rank::{top_rated, TOP_N};
use crate::pipeline::selections::Selections;
use rand::Rng;
use std::collections::BTreeSet;

/// Listings are drawn from this country's alias group. The traveler's own
/// country only labels the headings.
pub const TARGET_COUNTRY: &str = "USA";

const TOP_STAYS_COLUMNS: &[&str] = &[
    "property_type",
    "review_scores_rating",
    "number_of_reviews",
    "thumbnail_url",
    "name",
    "log_price",
    "was_price",
];

const ACTIVITY_COLUMNS: &[&str] = &[
    "specification",
    "review_scores_rating",
    "number_of_reviews",
    "thumbnail_url",
    "name",
];

const DEAL_COLUMNS: &[&str] = &[
    "property_type",
    "latitude",
    "longitude",
    "name",
    "specification",
    "log_price",
    "was_price",
    "thumbnail_url",
];

/// Result of one ranked panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Listings(Vec<ListingCard>),
    /// Nothing matched; the message is shown in place of the grid.
    Empty(String),
}

impl Panel {
    fn ranked(table: &Table, empty_message: impl FnOnce() -> String) -> Self {
        if table.is_empty() {
            Panel::Empty(empty_message())
        } else {
            Panel::Listings(cards(&top_rated(table, TOP_N), CARD_PLACEHOLDER))
        }
    }
}

/// Every panel of the dashboard for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub property_types: Vec<String>,
    pub selected_property: Option<String>,
    pub top_by_type: Panel,
    pub popular: Vec<ListingCard>,
    pub activity_heading: String,
    pub activities: Panel,
    pub deals: Vec<Bundle>,
}

/// Run the whole pipeline over `table`.
/// `table` is never modified; every panel works on its own copy.
pub fn build_dashboard<R: Rng + ?Sized>(
    table: &Table,
    selections: &Selections,
    rng: &mut R,
) -> Dashboard {
    let searched = with_capacity(&available_by(table, selections.date), selections.capacity);
    tracing::debug!("{} of {} listings pass date and capacity", searched.len(), table.len());

    let local = ensure_columns(&in_country(&searched, TARGET_COUNTRY), TOP_STAYS_COLUMNS);
    let property_types = distinct_property_types(&local);

    let selected_property = selections
        .property_type
        .clone()
        .or_else(|| property_types.first().cloned());

    let top_by_type = match &selected_property {
        Some(kind) => {
            let of_kind = of_property_type(&local, kind);
            tracing::debug!("{} listings of type {kind}", of_kind.len());
            Panel::ranked(&of_kind, || {
                format!("No listings available for property type: {kind}")
            })
        }
        None => Panel::Empty("No listings available for property type: none".to_string()),
    };

    let popular = cards(&top_rated(&local, TOP_N), CARD_PLACEHOLDER);

    let activity_pool = ensure_columns(&in_country(table, TARGET_COUNTRY), ACTIVITY_COLUMNS);
    let near = near_activities(&activity_pool, &selections.activities);
    let activities = Panel::ranked(&near, || {
        "No listings found for the selected activity area(s).".to_string()
    });
    let activity_heading = if selections.activities.is_empty() {
        "Top Activities Overall".to_string()
    } else {
        selections.activities.join(", ")
    };

    let deal_pool = ensure_columns(table, DEAL_COLUMNS);
    let deals = package_deals(&deal_pool, selections.property_type.as_deref(), rng);

    Dashboard {
        property_types,
        selected_property,
        top_by_type,
        popular,
        activity_heading,
        activities,
        deals,
    }
}

/// Sorted distinct non-null property types.
pub fn distinct_property_types(table: &Table) -> Vec<String> {
    table
        .column_values("property_type")
        .filter_map(|c| c.as_text())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted distinct countries offered at sign-in.
pub fn country_options(table: &Table) -> Vec<String> {
    if !table.has_column("country") {
        return vec!["Indonesia".to_string()];
    }
    table
        .column_values("country")
        .filter_map(|c| c.as_text())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader::read_table;
    use crate::pipeline::filters::CapacityMinimums;
    use crate::pipeline::selections::default_date;
    use rand::{rngs::StdRng, SeedableRng};

    const LISTINGS: &str = "\
name,property_type,country,bedrooms,bathrooms,beds,review_scores_rating,number_of_reviews,was_price,log_price,specification,latitude,longitude,available_date
Loft A,Apartment,USA,2,1,2,90,10,200,150,\"Near Beach, Near Old Town\",1.0,1.0,2025-10-01
Loft B,Apartment,United States,2,1,2,90,50,220,160,Near Beach,2.0,1.0,2025-10-01
Loft C,Apartment,usa,3,2,4,95,1,180,100,Near Temple,3.0,1.0,2025-10-01
Cabin D,House,America,,1,2,99,300,300,250,Near Forest Trail,4.0,1.0,2025-10-01
Villa E,Villa,France,4,3,6,100,900,500,400,Near Beach,5.0,1.0,2025-10-01
Late F,Apartment,USA,2,1,2,100,999,100,90,Near Beach,6.0,1.0,2025-12-01
";

    fn selections() -> Selections {
        Selections {
            date: default_date(),
            night_stay: 3,
            capacity: CapacityMinimums {
                bedrooms: 1,
                bathrooms: 1,
                beds: 1,
            },
            property_type: None,
            activities: Vec::new(),
        }
    }

    fn names(cards: &[ListingCard]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    fn build_from(csv: &str, s: &Selections) -> Dashboard {
        let table = read_table(csv.as_bytes()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        build_dashboard(&table, s, &mut rng)
    }

    fn build(s: &Selections) -> Dashboard {
        build_from(LISTINGS, s)
    }

    #[test]
    fn top_stays_default_to_first_property_type() {
        let d = build(&selections());

        // Cabin D has no bedrooms recorded, Late F is not yet available.
        assert_eq!(d.property_types, vec!["Apartment"]);
        assert_eq!(d.selected_property.as_deref(), Some("Apartment"));
        match &d.top_by_type {
            Panel::Listings(cards) => assert_eq!(names(cards), vec!["Loft C", "Loft B", "Loft A"]),
            other => panic!("expected listings, got {other:?}"),
        }
        assert_eq!(names(&d.popular), vec!["Loft C", "Loft B", "Loft A"]);
    }

    #[test]
    fn unknown_property_type_reports_empty() {
        let mut s = selections();
        s.property_type = Some("Castle".into());
        let d = build(&s);

        assert_eq!(
            d.top_by_type,
            Panel::Empty("No listings available for property type: Castle".into())
        );
    }

    #[test]
    fn listings_come_from_usa_alias_group() {
        let d = build(&selections());

        // Villa E outranks everything but is in France.
        assert!(!names(&d.popular).contains(&"Villa E"));
        assert!(!d.property_types.contains(&"Villa".to_string()));
        match &d.activities {
            Panel::Listings(cards) => assert!(!names(cards).contains(&"Villa E")),
            other => panic!("expected listings, got {other:?}"),
        }
    }

    #[test]
    fn no_usa_listings_shows_everything() {
        let csv = "\
name,property_type,country,review_scores_rating,number_of_reviews
FR1,Villa,France,90,10
JP1,House,Japan,95,5
";
        let d = build_from(csv, &selections());
        assert_eq!(names(&d.popular), vec!["JP1", "FR1"]);
        assert_eq!(d.property_types, vec!["House", "Villa"]);
    }

    #[test]
    fn activities_ignore_search_filters() {
        let mut s = selections();
        s.activities = vec!["Near Beach".into()];
        let d = build(&s);

        assert_eq!(d.activity_heading, "Near Beach");
        match &d.activities {
            // Late F is included: the activity panel uses the unfiltered table.
            Panel::Listings(cards) => {
                assert_eq!(names(cards), vec!["Late F", "Loft B", "Loft A"])
            }
            other => panic!("expected listings, got {other:?}"),
        }
    }

    #[test]
    fn activities_with_no_match_report_empty() {
        let mut s = selections();
        s.activities = vec!["Near Beach".into(), "Near Temple".into()];
        let d = build(&s);

        assert_eq!(
            d.activities,
            Panel::Empty("No listings found for the selected activity area(s).".into())
        );
        assert_eq!(d.activity_heading, "Near Beach, Near Temple");
    }

    #[test]
    fn deals_come_in_pairs() {
        let d = build(&selections());
        assert_eq!(d.deals.len(), 3);
    }

    #[test]
    fn country_options_fall_back_without_column() {
        let t = read_table("name\nA\n".as_bytes()).unwrap();
        assert_eq!(country_options(&t), vec!["Indonesia"]);

        let t = read_table(LISTINGS.as_bytes()).unwrap();
        assert_eq!(
            country_options(&t),
            vec!["America", "France", "USA", "United States", "usa"]
        );
    }
}
