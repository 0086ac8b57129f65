use maud::{html, Markup};

/// Placeholder sign-in: two social buttons and the email form.
pub fn sign_in_form(countries: &[String]) -> Markup {
    html! {
        div class="card sign-in" {
            div style="display: flex; gap: 12px;" {
                form method="post" action="/auth/guest?provider=google" {
                    button type="submit" class="btn" { "🌐 Continue with Google" }
                }
                form method="post" action="/auth/guest?provider=facebook" {
                    button type="submit" class="btn" { "📘 Continue with Facebook" }
                }
            }

            hr;
            p { strong { "Or sign in / create with email" } }

            form method="post" action="/auth/email" {
                label for="email" { "Email" }
                input type="email" id="email" name="email" placeholder="name@email.com" autocomplete="email";

                label for="country" { "Country" }
                select id="country" name="country" {
                    @for c in countries {
                        option value=(c) { (c) }
                    }
                }

                p { em { "with phone number" } }
                button type="submit" class="btn btn-primary" { "Sign in / Create" }
            }
        }
    }
}
