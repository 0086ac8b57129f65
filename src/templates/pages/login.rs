use crate::templates::components::sign_in_form;
use crate::templates::layouts::desktop::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn login_page(chrome: &Chrome, countries: &[String]) -> Markup {
    desktop_layout(
        "Sign in | Personalized Stay",
        chrome,
        html! {
            main class="narrow" {
                h3 { "👋 Welcome to " strong { "Personalized Stay" } }
                p class="lead" { "Make every trip feel like coming home 🌍" }
                p { "Create an account or sign in to get recommendations tailored for you." }

                (sign_in_form(countries))
            }
        },
    )
}
