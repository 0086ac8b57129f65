use crate::app::App;
use crate::auth::sessions::{expired_session_cookie, session_cookie, session_token};
use crate::auth::{Provider, Traveler};
use crate::dataset::DataSource;
use crate::errors::ServerError;
use crate::media;
use crate::pipeline::panels::country_options;
use crate::pipeline::{build_dashboard, CapacityOptions, Selections};
use crate::responses::{html_response, redirect, redirect_with_cookie, ResultResp};
use crate::templates::pages::{dashboard_page, login_page, DashboardVm};
use crate::templates::Chrome;
use astra::Request;
use chrono::Utc;
use std::io::Read;
use url::form_urlencoded;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => match current_session(&req, app) {
            Some(_) => redirect("/dashboard"),
            None => redirect("/login"),
        },
        ("GET", "/login") => login(&req, app),
        ("POST", "/auth/guest") => {
            let pairs = query_pairs(&req);
            let provider = lookup(&pairs, "provider")
                .ok_or_else(|| ServerError::BadRequest("missing provider".into()))?;
            let provider = Provider::parse(provider)?;
            start_session(app, Traveler::from_provider(provider))
        }
        ("POST", "/auth/email") => {
            let pairs = form_pairs(&mut req)?;
            let traveler = Traveler::from_form(
                lookup(&pairs, "email").unwrap_or_default(),
                lookup(&pairs, "country"),
            );
            start_session(app, traveler)
        }
        ("POST", "/logout") => {
            if let Some((token, traveler)) = current_session(&req, app) {
                app.sessions.revoke(&token);
                tracing::info!("{} signed out", traveler.email);
            }
            redirect_with_cookie("/login", &expired_session_cookie())
        }
        ("GET", "/dashboard") => dashboard(&req, app),
        _ => Err(ServerError::NotFound),
    }
}

fn login(req: &Request, app: &App) -> ResultResp {
    if current_session(req, app).is_some() {
        return redirect("/dashboard");
    }

    let dataset = app.dataset()?;
    let countries = country_options(&dataset.table);
    html_response(login_page(&chrome(app, None), &countries))
}

fn start_session(app: &App, traveler: Traveler) -> ResultResp {
    tracing::info!("{} signed in", traveler.email);
    let token = app.sessions.create(traveler, Utc::now().timestamp());
    tracing::debug!("{} sessions held", app.sessions.count());
    redirect_with_cookie("/dashboard", &session_cookie(&token))
}

fn dashboard(req: &Request, app: &App) -> ResultResp {
    let Some((_, traveler)) = current_session(req, app) else {
        return redirect("/login");
    };

    let dataset = app.dataset()?;
    let options = CapacityOptions::from_table(&dataset.table);
    let pairs = query_pairs(req);
    let selections = Selections::from_pairs(
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        &options,
    );

    let dashboard = build_dashboard(&dataset.table, &selections, &mut rand::thread_rng());

    let vm = DashboardVm {
        chrome: chrome(app, Some(&traveler)),
        traveler_name: traveler.display_name(),
        country_label: traveler
            .country
            .clone()
            .unwrap_or_else(|| "your country".to_string()),
        using_sample_data: dataset.source == DataSource::Synthetic,
        hero_sources: media::hero_sources(&app.config.images_dir),
        banner: media::banner_data_uri(&app.config.images_dir),
        selections: &selections,
        options: &options,
        dashboard: &dashboard,
    };

    html_response(dashboard_page(&vm))
}

fn chrome(app: &App, traveler: Option<&Traveler>) -> Chrome {
    Chrome {
        logo: media::logo_data_uri(&app.config.images_dir),
        traveler_name: traveler.map(Traveler::display_name),
    }
}

/// The raw session token and its traveler, when the cookie names a live session.
fn current_session(req: &Request, app: &App) -> Option<(String, Traveler)> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    let token = session_token(header)?;
    let traveler = app.sessions.load(&token, Utc::now().timestamp())?;
    Some((token, traveler))
}

fn query_pairs(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn form_pairs(req: &mut Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
