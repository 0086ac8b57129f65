use crate::app::App;
use crate::config::Config;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const LISTINGS_CSV: &str = "\
name,property_type,country,bedrooms,bathrooms,beds,review_scores_rating,number_of_reviews,was_price,log_price,specification,latitude,longitude,available_date,thumbnail_url
Loft A,Apartment,USA,2,1,2,90,10,200,150,\"Near Beach, Near Old Town\",1.0,1.0,2025-10-01,https://img.example.com/a.jpg
Loft B,Apartment,United States,2,1,2,90,50,220,160,Near Beach,2.0,1.0,2025-10-01,
Loft C,Apartment,usa,3,2,4,95,1,180,100,Near Temple,3.0,1.0,2025-10-01,images/c.jpg
Cabin D,House,America,,1,2,99,300,300,250,Near Forest Trail,4.0,1.0,2025-10-01,
Villa E,Villa,France,4,3,6,100,900,500,400,Near Beach,5.0,1.0,2025-10-01,
Late F,Apartment,USA,2,1,2,100,999,100,90,Near Beach,6.0,1.0,2025-12-01,
";

fn unique_path(prefix: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}.{ext}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// App backed by a fresh copy of the test listings.
pub fn test_app() -> App {
    let path = unique_path("listings_test", "csv");
    std::fs::write(&path, LISTINGS_CSV).expect("Failed to write test dataset");
    app_with_data(path)
}

pub fn app_with_data(data_path: PathBuf) -> App {
    App::new(Config {
        data_path,
        images_dir: PathBuf::from("/nonexistent/test/images"),
        ..Config::default()
    })
}

pub fn get(app: &App, uri: &str, session: Option<&str>) -> Response {
    send(app, Method::GET, uri, session, "")
}

pub fn send(app: &App, method: Method, uri: &str, session: Option<&str>, form: &str) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    if !form.is_empty() {
        builder = builder.header("Content-Type", "application/x-www-form-urlencoded");
    }
    let req = builder.body(Body::from(form.to_string())).unwrap();

    handle(req, app).expect("Handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Sign in through the email form and return the session token.
pub fn sign_in(app: &App, email: &str, country: &str) -> String {
    let form = format!("email={email}&country={country}");
    let resp = send(app, Method::POST, "/auth/email", None, &form);
    assert_eq!(resp.status(), 302);

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("no session cookie");
    cookie
        .split(';')
        .next()
        .and_then(|kv| kv.strip_prefix("session="))
        .expect("malformed session cookie")
        .to_string()
}
