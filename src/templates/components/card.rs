use crate::pipeline::listing::ListingCard;
use crate::pipeline::Panel;
use maud::{html, Markup};

/// Which extra line a listing card shows under its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDetail {
    Prices,
    Specification,
}

pub fn listing_card(card: &ListingCard, detail: CardDetail) -> Markup {
    html! {
        div class="card" {
            img src=(card.thumbnail) alt=(card.short_name()) loading="lazy";
            p { strong { (card.short_name()) } }
            p { "🛏️ " (card.bedrooms) " Bedroom | 🛁 " (card.bathrooms) " Bathroom" }
            p { "👨‍👩‍👧 " (card.beds) " Guests" }
            p {
                "⭐ "
                @match card.rating {
                    Some(r) => {
                        strong { (format!("{r:.1}")) }
                    }
                    None => {
                        strong { "New" }
                    }
                }
                " (" (card.reviews) ")"
            }
            @match detail {
                CardDetail::Prices => {
                    p { span class="was" { (format!("Was: ${:.2}", card.was_price)) } }
                    p { span class="now" { (format!("Now: ${:.2}", card.price)) } }
                }
                CardDetail::Specification => {
                    p { span class="spec" { (card.specification.as_deref().unwrap_or_default()) } }
                }
            }
        }
    }
}

pub fn listing_grid(cards: &[ListingCard], detail: CardDetail) -> Markup {
    html! {
        div class="grid" {
            @for card in cards {
                (listing_card(card, detail))
            }
        }
    }
}

pub fn empty_notice(message: &str) -> Markup {
    html! {
        div class="warning" role="status" { (message) }
    }
}

/// A ranked panel: the grid, or the reason it is empty.
pub fn panel(panel: &Panel, detail: CardDetail) -> Markup {
    match panel {
        Panel::Listings(cards) => listing_grid(cards, detail),
        Panel::Empty(message) => empty_notice(message),
    }
}
