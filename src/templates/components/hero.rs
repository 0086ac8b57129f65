use maud::{html, Markup, PreEscaped};

const ROTATE_MS: u32 = 10_000;

/// Cross-fading image carousel. `sources` must not be empty.
pub fn hero(sources: &[String]) -> Markup {
    let first = sources.first().map(String::as_str).unwrap_or_default();
    // sources are data URIs or http(s) URLs, never markup
    let images = serde_json::to_string(sources).unwrap_or_else(|_| "[]".to_string());

    html! {
        div class="hero" aria-hidden="true" {
            img id="hero1" src=(first) style="opacity:1;" alt="featured image 1";
            img id="hero2" src=(first) style="opacity:0;" alt="featured image 2";
        }
        script {
            (PreEscaped(format!(r#"
(function() {{
  const images = {images};
  if (images.length < 2) return;
  const a = document.getElementById('hero1');
  const b = document.getElementById('hero2');
  let idx = 0, showingFirst = true, timer = null;
  function next() {{
    idx = (idx + 1) % images.length;
    const [show, hide] = showingFirst ? [b, a] : [a, b];
    show.src = images[idx];
    show.style.opacity = 1;
    hide.style.opacity = 0;
    showingFirst = !showingFirst;
  }}
  timer = setInterval(next, {ROTATE_MS});
  document.addEventListener('visibilitychange', function() {{
    clearInterval(timer);
    if (!document.hidden) timer = setInterval(next, {ROTATE_MS});
  }});
}})();
"#)))
        }
    }
}
