use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, send, sign_in, test_app};
use astra::Body;
use http::{Method, Request};

#[test]
fn root_sends_signed_out_visitors_to_login() {
    let app = test_app();
    let resp = get(&app, "/", None);

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn login_page_offers_providers_and_dataset_countries() {
    let app = test_app();
    let resp = get(&app, "/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Continue with Google"));
    assert!(body.contains("Continue with Facebook"));
    assert!(body.contains("France"));
    assert!(body.contains("© Personalized Stay"));
    assert!(!body.contains('—'));
}

#[test]
fn email_sign_in_sets_session_cookie() {
    let app = test_app();
    let resp = send(
        &app,
        Method::POST,
        "/auth/email",
        None,
        "email=jane.doe%40example.com&country=USA",
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn signed_in_visitors_skip_login() {
    let app = test_app();
    let token = sign_in(&app, "jane.doe%40example.com", "USA");

    let resp = get(&app, "/login", Some(&token));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");

    let resp = get(&app, "/", Some(&token));
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn guest_provider_sign_in_uses_guest_account() {
    let app = test_app();
    let resp = send(&app, Method::POST, "/auth/guest?provider=google", None, "");
    assert_eq!(resp.status(), 302);

    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    let token = cookie
        .split(';')
        .next()
        .and_then(|kv| kv.strip_prefix("session="))
        .unwrap()
        .to_string();

    let body = body_string(get(&app, "/dashboard", Some(&token)));
    assert!(body.contains("Welcome back, Guest_Google"));
}

#[test]
fn unknown_provider_is_rejected() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/guest?provider=myspace")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn missing_provider_is_rejected() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/guest")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn logout_revokes_the_session() {
    let app = test_app();
    let token = sign_in(&app, "jane.doe%40example.com", "USA");

    let resp = send(&app, Method::POST, "/logout", Some(&token), "");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));

    let resp = get(&app, "/dashboard", Some(&token));
    assert_eq!(location(&resp), "/login");
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
}
