use super::fake_api::{listing, FakeApi};
use crate::domain::Role;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_form, test_state};
use scraper::{Html, Selector};

fn signed_in_student(api: FakeApi) -> crate::router::AppState {
    let (state, _) = test_state(api.with_account(1, "bob", "pw", Role::Student), false);
    handle(post_form("/auth/login", "username=bob&password=pw"), &state).unwrap();
    state
}

fn result_ids(body: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    let sel = Selector::parse("#results .listing").unwrap();
    doc.select(&sel)
        .filter_map(|e| e.value().attr("data-id").map(str::to_string))
        .collect()
}

#[test]
fn price_window_keeps_two_of_three_sorted_by_price() {
    let api = FakeApi::new()
        .with_listing(listing(1, 9, 5000.0))
        .with_listing(listing(2, 9, 12000.0))
        .with_listing(listing(3, 9, 8000.0));
    let state = signed_in_student(api);

    let resp = handle(get("/search?q=&min=6000&max=20000&sort=price"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(result_ids(&body_string(resp)), vec!["3", "2"]);
}

#[test]
fn text_query_and_distance_sort() {
    let mut near = listing(1, 9, 7000.0);
    near.distance_from_university = 0.5;
    near.amenities = vec!["Parking".into()];
    let mut far = listing(2, 9, 6000.0);
    far.distance_from_university = 4.0;
    far.amenities = vec!["Parking".into(), "AC".into()];
    let other = listing(3, 9, 6500.0);

    let state = signed_in_student(
        FakeApi::new()
            .with_listing(far)
            .with_listing(other)
            .with_listing(near),
    );

    let resp = handle(get("/search?q=PARK&sort=distance"), &state).unwrap();
    assert_eq!(result_ids(&body_string(resp)), vec!["1", "2"]);
}

#[test]
fn fetch_failure_is_shown_with_retry() {
    let state = signed_in_student(FakeApi::new().failing_reads());

    let resp = handle(get("/search?q=ac"), &state).unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains("Error fetching accommodations: database unavailable"));
    assert!(body.contains("Try again"));
}

#[test]
fn export_downloads_spreadsheet() {
    let state = signed_in_student(FakeApi::new().with_listing(listing(1, 9, 5000.0)));

    let resp = handle(get("/search/export?sort=price"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let ct = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.contains("spreadsheetml"));
}

#[test]
fn doubled_slash_export_still_requires_login() {
    let (state, _) = test_state(FakeApi::new().with_listing(listing(1, 9, 5000.0)), false);

    let resp = handle(get("/search//export"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?next=%2Fsearch%2F%2Fexport");
}

#[test]
fn export_surfaces_api_failure() {
    let state = signed_in_student(FakeApi::new().failing_reads());
    assert!(matches!(
        handle(get("/search/export"), &state),
        Err(ServerError::Api(_))
    ));
}

#[test]
fn unknown_path_is_not_found() {
    let (state, _) = test_state(FakeApi::new(), false);
    assert!(matches!(
        handle(get("/nowhere"), &state),
        Err(ServerError::NotFound)
    ));
}
