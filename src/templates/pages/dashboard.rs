use crate::pipeline::{CapacityOptions, Dashboard, Selections};
use crate::templates::components::{
    bundle_grid, empty_notice, hero, listing_grid, panel, search_form, CardDetail,
};
use crate::templates::layouts::desktop::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub chrome: Chrome,
    pub traveler_name: String,
    /// The traveler's country, or "your country".
    pub country_label: String,
    pub using_sample_data: bool,
    pub hero_sources: Vec<String>,
    pub banner: Option<String>,
    pub selections: &'a Selections,
    pub options: &'a CapacityOptions,
    pub dashboard: &'a Dashboard,
}

pub fn dashboard_page(vm: &DashboardVm<'_>) -> Markup {
    let d = vm.dashboard;
    let country = &vm.country_label;

    desktop_layout(
        "Personalized Stay | Dashboard",
        &vm.chrome,
        html! {
            main {
                @if vm.using_sample_data {
                    (empty_notice("Dataset file not found. Showing sample listings."))
                }

                h1 { "Welcome back, " (vm.traveler_name) " 👋" }
                h3 { "Planning another trip to " strong { (country) } " or international?" }
            }

            (hero(&vm.hero_sources))

            main {
                h3 { "🏠 Find Your Perfect Stay" }
                (search_form(vm.selections, vm.options, &d.property_types, d.selected_property.as_deref()))

                hr;
                section id="top-stays" {
                    h2 { "🏆 Top Stays for Travelers from " strong { (country) } }
                    p { "Find the highest-rated stays across different property types, picked for you." }
                    @if let Some(kind) = &d.selected_property {
                        h3 { "🌟 Top 5 " strong { (kind) } " in the " strong { (country) } }
                    }
                    (panel(&d.top_by_type, CardDetail::Prices))
                }

                hr;
                section id="popular" {
                    h3 { "✨ Most Popular Stays " strong { (country) } }
                    (listing_grid(&d.popular, CardDetail::Prices))
                }

                hr;
                section id="activities" {
                    h2 { "🎯 Top Activities for " strong { (country) } " Traveler’s Picks" }
                    p { "Explore our best-in-class destinations, loved and recommended by our guests!" }
                    h3 { "🏖️ Traveler’s Picks: " strong { (d.activity_heading) } }
                    (panel(&d.activities, CardDetail::Specification))
                }

                hr;
                section id="deals" {
                    h2 { "💎 Special Deals for You" }
                    p { "Exclusive discounts and package deals for frequent travelers." }
                    (bundle_grid(&d.deals))
                }

                hr;
                @match &vm.banner {
                    Some(src) => {
                        img class="banner" src=(src) alt="travel tips";
                    }
                    None => {
                        (empty_notice("⚠️ image4.png not found in 'images/' folder"))
                    }
                }

                section id="tips" {
                    h2 { "Travel Tips from Indonesia to " (country) }
                    p { "Practical info to help you prepare: flight duration, transport, SIM card, visa, and cultural tips." }
                    h3 { "Quick Practical Tips" }
                    ul {
                        li { strong { "Flight duration:" } " Varies by route; typically 7–20 hours depending on connections." }
                        li { strong { "Transport:" } " Use local rideshares or public transit. Check airport transfer options ahead of time." }
                        li { strong { "SIM card / eSIM:" } " Buy at the airport or pre-order an international eSIM for convenience." }
                        li { strong { "Visa:" } " Check official consulate for the latest requirements." }
                        li { strong { "Cultural tips:" } " Respect local customs and tipping practices. Learn a few local phrases; hosts appreciate it." }
                    }
                }
            }
        },
    )
}
