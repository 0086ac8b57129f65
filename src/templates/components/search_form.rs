use crate::pipeline::selections::{sorted_activities, NIGHT_STAY_MAX};
use crate::pipeline::{CapacityOptions, Selections};
use maud::{html, Markup};

fn minimum_select(name: &str, label: &str, options: &[i64], selected: i64) -> Markup {
    html! {
        label {
            strong { (label) }
            select name=(name) {
                @for v in options {
                    option value=(v) selected[*v == selected] { (v) }
                }
            }
        }
    }
}

/// The "Find Your Perfect Stay" card. Submits back to the dashboard as a GET.
pub fn search_form(
    selections: &Selections,
    options: &CapacityOptions,
    property_types: &[String],
    selected_property: Option<&str>,
) -> Markup {
    html! {
        form class="card" method="get" action="/dashboard" {
            div class="search" {
                label {
                    strong { "📍 Location" }
                    input type="text" name="location" value="Around me";
                }
                label {
                    strong { "📅 Date" }
                    input type="date" name="date" value=(selections.date.format("%Y-%m-%d").to_string());
                }
                label {
                    strong { "🌙 Night Stay" }
                    select name="night_stay" {
                        @for n in 1..=NIGHT_STAY_MAX {
                            option value=(n) selected[n == selections.night_stay] { (n) }
                        }
                    }
                }
                (minimum_select("bedrooms", "🛏️ Bedrooms", &options.bedrooms, selections.capacity.bedrooms))
                (minimum_select("bathrooms", "🛁 Bathrooms", &options.bathrooms, selections.capacity.bathrooms))
                (minimum_select("beds", "👨‍👩‍👧 Guests (Adults)", &options.beds, selections.capacity.beds))
                label {
                    strong { "🏠 Choose Property Type" }
                    select name="property_type" {
                        @for t in property_types {
                            option value=(t) selected[Some(t.as_str()) == selected_property] { (t) }
                        }
                    }
                }
                label {
                    strong { "🏖️ Choose Nearby Attractions" }
                    select name="activity" multiple size="6" {
                        @for a in sorted_activities() {
                            option value=(a) selected[selections.activities.iter().any(|s| s == a)] { (a) }
                        }
                    }
                }
            }
            button type="submit" class="btn btn-primary" { "Search" }
        }
    }
}
