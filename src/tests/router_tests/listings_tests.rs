use super::fake_api::{listing, FakeApi};
use crate::domain::Role;
use crate::errors::ServerError;
use crate::router::{handle, AppState};
use crate::tests::utils::{body_string, get, location, post_form, test_state};
use scraper::{Html, Selector};

const UPLOAD_FORM: &str = "title=Sunny+Room&address=12+Main+St&price=8000&distance=1.5\
    &amenities=Wi-Fi&amenities=AC&photos=&contact_email=bea%40x.com&contact_phone=555";

fn signed_in(api: FakeApi, username: &str, protect_details: bool) -> AppState {
    let api = api
        .with_account(1, "bob", "pw", Role::Student)
        .with_account(2, "bea", "pw", Role::Broker)
        .with_account(3, "ben", "pw", Role::Broker);
    let (state, _) = test_state(api, protect_details);
    let form = format!("username={username}&password=pw");
    handle(post_form("/auth/login", &form), &state).unwrap();
    state
}

#[test]
fn upload_creates_then_refreshes_dashboard() {
    let api = FakeApi::new();
    let state = signed_in(api.clone(), "bea", false);

    let resp = handle(post_form("/upload", UPLOAD_FORM), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/upload?notice=uploaded");

    let created = api.listings();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].broker_id, 2);
    assert_eq!(created[0].amenities, vec!["Wi-Fi", "AC"]);

    let resp = handle(get(&location(&resp)), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Accommodation uploaded successfully"));

    let doc = Html::parse_document(&body);
    let cards = Selector::parse("#my-listings .card").unwrap();
    assert_eq!(doc.select(&cards).count(), 1);

    let calls = api.calls();
    let create_at = calls.iter().position(|c| *c == "create").unwrap();
    let refresh_at = calls.iter().rposition(|c| *c == "list_by_broker").unwrap();
    assert!(create_at < refresh_at);
}

#[test]
fn invalid_upload_keeps_input_and_skips_api() {
    let api = FakeApi::new();
    let state = signed_in(api.clone(), "bea", false);

    let form = UPLOAD_FORM.replace("price=8000", "price=cheap");
    let resp = handle(post_form("/upload", &form), &state).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Price must be a number"));
    assert!(body.contains("value=\"Sunny Room\""));
    assert!(!api.calls().contains(&"create"));
}

#[test]
fn dashboard_lists_only_own_listings() {
    let api = FakeApi::new()
        .with_listing(listing(10, 2, 5000.0))
        .with_listing(listing(11, 3, 6000.0));
    let state = signed_in(api, "bea", false);

    let body = body_string(handle(get("/upload"), &state).unwrap());
    let doc = Html::parse_document(&body);
    let cards = Selector::parse("#my-listings .card").unwrap();
    let ids: Vec<&str> = doc
        .select(&cards)
        .filter_map(|e| e.value().attr("data-id"))
        .collect();
    assert_eq!(ids, vec!["10"]);
}

#[test]
fn details_are_public_unless_protected() {
    let api = FakeApi::new().with_listing(listing(10, 2, 5000.0));

    let (open, _) = test_state(api.clone(), false);
    let resp = handle(get("/accommodation/10"), &open).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Room 10"));
    assert!(body.contains("owner@example.com"));

    let (strict, _) = test_state(api, true);
    let resp = handle(get("/accommodation/10"), &strict).unwrap();
    assert_eq!(location(&resp), "/login?next=%2Faccommodation%2F10");
}

#[test]
fn missing_listing_is_not_found() {
    let (state, _) = test_state(FakeApi::new(), false);
    assert!(matches!(
        handle(get("/accommodation/99"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/accommodation/abc"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn owner_can_edit() {
    let api = FakeApi::new().with_listing(listing(10, 2, 5000.0));
    let state = signed_in(api.clone(), "bea", false);

    let resp = handle(get("/accommodation/10/edit"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("value=\"Room 10\""));

    let form = UPLOAD_FORM.replace("price=8000", "price=5500");
    let resp = handle(post_form("/accommodation/10/edit", &form), &state).unwrap();
    assert_eq!(location(&resp), "/accommodation/10?notice=updated");

    let updated = &api.listings()[0];
    assert_eq!(updated.title, "Sunny Room");
    assert_eq!(updated.price, 5500.0);
}

#[test]
fn other_broker_is_sent_back_to_details() {
    let api = FakeApi::new().with_listing(listing(10, 2, 5000.0));
    let state = signed_in(api.clone(), "ben", false);

    let resp = handle(get("/accommodation/10/edit"), &state).unwrap();
    assert_eq!(location(&resp), "/accommodation/10?notice=not_owner");

    // A direct POST still reaches the API, which refuses it.
    let resp = handle(post_form("/accommodation/10/edit", UPLOAD_FORM), &state).unwrap();
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Failed to update accommodation: Forbidden"));
    assert_eq!(api.listings()[0].title, "Room 10");
}

#[test]
fn student_cannot_reach_edit_or_delete() {
    let api = FakeApi::new().with_listing(listing(10, 2, 5000.0));
    let state = signed_in(api.clone(), "bob", false);

    let resp = handle(post_form("/accommodation/10/delete", ""), &state).unwrap();
    assert_eq!(location(&resp), "/?notice=denied");
    assert_eq!(api.listings().len(), 1);
}

#[test]
fn doubled_slash_edit_is_still_broker_only() {
    let api = FakeApi::new().with_listing(listing(5, 2, 5000.0));
    let state = signed_in(api.clone(), "bob", false);

    let resp = handle(get("/accommodation//5/edit"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/?notice=denied");

    let form = UPLOAD_FORM.replace("Sunny+Room", "Taken");
    let resp = handle(post_form("/accommodation//5/edit", &form), &state).unwrap();
    assert_eq!(location(&resp), "/?notice=denied");
    assert_eq!(api.listings()[0].title, "Room 5");
    assert!(!api.calls().contains(&"update"));
}

#[test]
fn delete_removes_listing() {
    let api = FakeApi::new().with_listing(listing(10, 2, 5000.0));
    let state = signed_in(api.clone(), "bea", false);

    let resp = handle(post_form("/accommodation/10/delete", ""), &state).unwrap();
    assert_eq!(location(&resp), "/upload?notice=deleted");
    assert!(api.listings().is_empty());
}

#[test]
fn unauthenticated_post_goes_to_plain_login() {
    let (state, _) = test_state(FakeApi::new(), false);
    let resp = handle(post_form("/upload", UPLOAD_FORM), &state).unwrap();
    assert_eq!(location(&resp), "/login");
}
