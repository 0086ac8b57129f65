use crate::pipeline::bundle::Bundle;
use maud::{html, Markup};

/// Whole dollars with thousands separators, e.g. 1234.6 -> "1,235".
pub fn whole_dollars(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0.0 && rounded != "0" {
        out.insert(0, '-');
    }
    out
}

pub fn bundle_card(bundle: &Bundle) -> Markup {
    let p = &bundle.pricing;
    html! {
        div class="card" {
            img src=(bundle.first.thumbnail) alt=(bundle.first.name) loading="lazy";
            p { strong { (bundle.first.name) } }
            p { span class="spec" { (bundle.first.specification.as_deref().unwrap_or_default()) } }
            p { strong { (bundle.second.name) } }
            p { span class="spec" { (bundle.second.specification.as_deref().unwrap_or_default()) } }
            p {
                span class="was" {
                    "$ " (whole_dollars(p.first_was))
                    " + $ " (whole_dollars(p.second_was))
                    " = $ " (whole_dollars(p.total_was))
                }
            }
            p { span class="now" { "Now: $ " (whole_dollars(p.total_now)) } }
            p { span class="save" { (format!("💰 Save {:.1}%", p.discount_pct)) } }
        }
    }
}

pub fn bundle_grid(bundles: &[Bundle]) -> Markup {
    html! {
        div class="grid deals" {
            @for b in bundles {
                (bundle_card(b))
            }
        }
    }
}
