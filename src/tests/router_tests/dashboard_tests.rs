use crate::tests::utils::{app_with_data, body_string, get, location, sign_in, test_app};
use std::path::PathBuf;

#[test]
fn dashboard_requires_a_session() {
    let app = test_app();
    let resp = get(&app, "/dashboard", None);

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn stale_cookie_is_treated_as_signed_out() {
    let app = test_app();
    let resp = get(&app, "/dashboard", Some("not-a-real-token"));

    assert_eq!(location(&resp), "/login");
}

#[test]
fn dashboard_greets_traveler_and_lists_local_stays() {
    let app = test_app();
    let token = sign_in(&app, "jane.doe%40example.com", "USA");

    let resp = get(&app, "/dashboard", Some(&token));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Welcome back, Jane Doe"));
    assert!(body.contains("Top Stays for Travelers from <strong>USA</strong>"));
    assert!(body.contains("Loft A"));
    assert!(body.contains("Loft C"));
    assert!(!body.contains("Dataset file not found"));
    assert!(!body.contains('—'));
}

#[test]
fn unknown_property_type_shows_empty_notice() {
    let app = test_app();
    let token = sign_in(&app, "jane.doe%40example.com", "USA");

    let body = body_string(get(&app, "/dashboard?property_type=Castle", Some(&token)));
    assert!(body.contains("No listings available for property type: Castle"));
}

#[test]
fn activity_filter_narrows_travelers_picks() {
    let app = test_app();
    let token = sign_in(&app, "jane.doe%40example.com", "USA");

    let body = body_string(get(
        &app,
        "/dashboard?activity=Near+Old+Town",
        Some(&token),
    ));
    assert!(body.contains("Traveler’s Picks: <strong>Near Old Town</strong>"));
    assert!(body.contains("Near Beach, Near Old Town"));
}

#[test]
fn unmatched_activities_show_notice() {
    let app = test_app();
    let token = sign_in(&app, "jane.doe%40example.com", "USA");

    let body = body_string(get(
        &app,
        "/dashboard?activity=Near+Beach&activity=Near+Museum",
        Some(&token),
    ));
    assert!(body.contains("Near Beach, Near Museum"));
    assert!(body.contains("No listings found for the selected activity area(s)."));
}

#[test]
fn missing_dataset_falls_back_to_sample_listings() {
    let app = app_with_data(PathBuf::from("/nonexistent/listings.csv"));
    let token = sign_in(&app, "guest%40example.com", "USA");

    let body = body_string(get(&app, "/dashboard", Some(&token)));
    assert!(body.contains("Dataset file not found"));
    assert!(body.contains("Hotel"));
}

#[test]
fn images_missing_shows_banner_notice() {
    let app = test_app();
    let token = sign_in(&app, "jane.doe%40example.com", "USA");

    let body = body_string(get(&app, "/dashboard", Some(&token)));
    assert!(body.contains("image4.png not found"));
}

#[test]
fn listings_stay_in_usa_group_for_foreign_travelers() {
    let app = test_app();
    let token = sign_in(&app, "marie%40example.fr", "France");

    let body = body_string(get(&app, "/dashboard", Some(&token)));
    assert!(body.contains("Top Stays for Travelers from <strong>France</strong>"));

    let start = body.find("id=\"top-stays\"").unwrap();
    let end = body.find("id=\"deals\"").unwrap();
    let panels = &body[start..end];
    assert!(panels.contains("Loft A"));
    assert!(!panels.contains("Villa E"));
}
