use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #0f1720; background: #fafafa; }
main { max-width: 1280px; margin: 0 auto; padding: 1.5rem 2rem 4rem; }
.top-navbar { position: sticky; top: 0; z-index: 10; display: flex; align-items: center;
  justify-content: space-between; padding: 0 2rem; height: 72px; background: #fff;
  border-bottom: 1px solid rgba(18,18,18,0.06); box-shadow: 0 10px 30px rgba(0,0,0,0.06); }
.brand { display: flex; align-items: center; gap: 12px; text-decoration: none; color: inherit; }
.brand-logo { height: 48px; }
.brand-title { font-size: 20px; font-weight: 800; }
.nav-actions { display: flex; gap: 12px; align-items: center; font-weight: 700; }
.btn { display: inline-block; padding: 9px 14px; border-radius: 10px; font-weight: 800;
  border: 1px solid rgba(18,18,18,0.08); background: transparent; cursor: pointer; }
.btn-primary { background: linear-gradient(90deg,#9444ED,#FF914D); color: #fff; border: none; }
.grid { display: grid; grid-template-columns: repeat(5, minmax(0, 1fr)); gap: 1rem; }
.grid.deals { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.card { background: #fff; border-radius: 12px; padding: 0.75rem; box-shadow: 0 4px 14px rgba(0,0,0,0.05); }
.card img { width: 100%; border-radius: 8px; display: block; }
.was { color: gray; text-decoration: line-through; }
.now { font-weight: 700; color: orange; }
.save { color: #16a34a; font-weight: 700; }
.spec { color: gray; font-size: 13px; }
.warning { background: #fff7e6; border: 1px solid #ffd591; padding: 0.75rem 1rem; border-radius: 8px; }
.hero { position: relative; width: 100%; height: 600px; overflow: hidden; background: #000; }
.hero img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;
  transition: opacity 0.8s ease-in-out; }
.banner { width: 100%; height: 600px; object-fit: cover; border-radius: 12px; }
.search { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 1rem; }
footer { text-align: center; padding: 25px 0; font-size: 14px; color: #555;
  border-top: 1px solid rgba(0,0,0,0.1); margin-top: 80px; }
@media (max-width: 920px) { .grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .grid.deals, .search { grid-template-columns: 1fr; } .brand-title { display: none; } }
"#;

/// What the navbar needs to know about the request.
pub struct Chrome {
    pub logo: Option<String>,
    pub traveler_name: Option<String>,
}

pub fn desktop_layout(title: &str, chrome: &Chrome, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header class="top-navbar" role="banner" {
                    a class="brand" href="/" {
                        @if let Some(logo) = &chrome.logo {
                            img class="brand-logo" src=(logo) alt="logo";
                        }
                        span class="brand-title" { "Personalized Stay" }
                    }
                    div class="nav-actions" {
                        @if let Some(name) = &chrome.traveler_name {
                            span { (name) }
                            form method="post" action="/logout" {
                                button type="submit" class="btn" { "Sign out" }
                            }
                        } @else {
                            a class="btn btn-primary" href="/login" { "Sign In / Create" }
                        }
                    }
                }
                (content)
                footer { "© Personalized Stay" }
            }
        }
    }
}
