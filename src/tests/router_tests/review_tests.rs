use crate::residents::{ApiError, ResidencyStatus, ResidentId, UpdateRequest};
use crate::router::handle;
use crate::tests::utils::{test_app, FakeResidentsApi};
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::json;
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

fn body_of(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn two_residents() -> FakeResidentsApi {
    FakeResidentsApi::new().with_list(json!([
        { "user": { "id": 1, "name": "Alma Reyes", "email": "alma@example.com",
                    "residency_status": "for_review" } },
        { "id": 50, "first_name": "Ben", "last_name": "Cruz",
          "verification_status": "Denied",
          "user": { "id": 2, "residencyStatus": "active" } },
        { "user": { "id": 3, "name": "Carla Done", "residencyStatus": "active" } }
    ]))
}

#[test]
fn home_page_links_to_review_queue() {
    let app = test_app(FakeResidentsApi::new());

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains(r#"href="/admin/review""#));
    assert_eq!(app.controller().api().list_calls(), 0);
}

#[test]
fn leaving_for_home_discards_review_state() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1/update"), &app).unwrap();

    handle(get("/"), &app).unwrap();

    let ctrl = app.controller();
    assert!(!ctrl.is_mounted());
    assert!(ctrl.state().queue.is_empty());
    assert!(ctrl.state().update.is_none());
}

#[test]
fn review_page_lists_only_residents_needing_review() {
    let app = test_app(two_residents());

    let resp = handle(get("/admin/review"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("Residents for Review"));
    assert!(body.contains("Alma Reyes"));
    assert!(body.contains("Ben Cruz"));
    assert!(!body.contains("Carla Done"), "active + verified resident must be filtered out");
    assert_eq!(app.controller().api().list_calls(), 1);
}

#[test]
fn review_page_shows_banner_when_backend_fails() {
    let app = test_app(
        FakeResidentsApi::new().with_list_error(ApiError::Network("connection refused".into())),
    );

    let resp = handle(get("/admin/review"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("Failed to load residents for review."));
    assert!(body.contains("No residents need review."));
}

#[test]
fn details_route_opens_modal_without_refetching() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();

    let body = body_of(handle(get("/admin/review/2"), &app).unwrap());

    assert!(body.contains("Resident Details"));
    assert!(body.contains("Denied"));
    assert_eq!(app.controller().api().list_calls(), 1);
}

#[test]
fn unknown_resident_is_not_found() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();

    assert!(matches!(
        handle(get("/admin/review/3"), &app),
        Err(crate::errors::ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/admin/review/99/update"), &app),
        Err(crate::errors::ServerError::NotFound)
    ));
}

#[test]
fn submit_updates_status_and_refreshes_queue() {
    let api = two_residents().with_list(json!([
        { "user": { "id": 1, "name": "Alma Reyes", "residency_status": "active" } },
        { "id": 50, "first_name": "Ben", "last_name": "Cruz",
          "verification_status": "Denied",
          "user": { "id": 2, "residencyStatus": "active" } }
    ]));
    let app = test_app(api);
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1/update"), &app).unwrap();

    let resp = handle(
        post_form(
            "/admin/review/1/status",
            "residency_status=active&status_notes=Visited+household",
        ),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("Residency status updated successfully."));
    assert!(!body.contains("Alma Reyes"));
    assert!(!body.contains("update-modal"));

    let ctrl = app.controller();
    assert_eq!(
        ctrl.api().updates(),
        vec![(
            ResidentId::new("1"),
            UpdateRequest {
                residency_status: ResidencyStatus::Active,
                status_notes: Some("Visited household".into()),
            }
        )]
    );
    assert_eq!(ctrl.api().list_calls(), 2);
}

#[test]
fn submit_without_status_makes_no_call() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1/update"), &app).unwrap();

    let body = body_of(
        handle(
            post_form("/admin/review/1/status", "residency_status=&status_notes=x"),
            &app,
        )
        .unwrap(),
    );

    assert!(body.contains("update-modal"));
    assert!(app.controller().api().updates().is_empty());
}

#[test]
fn failed_submit_keeps_modal_open() {
    let api = two_residents().with_update_error(ApiError::Status {
        status: 422,
        body: "invalid".into(),
    });
    let app = test_app(api);
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/2/update"), &app).unwrap();

    let body = body_of(
        handle(
            post_form("/admin/review/2/status", "residency_status=relocated"),
            &app,
        )
        .unwrap(),
    );

    assert!(body.contains("Failed to update residency status."));
    assert!(body.contains("update-modal"));
    assert!(body.contains(r#"<option value="relocated" selected>"#));
}

#[test]
fn submit_for_other_resident_is_rejected() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1/update"), &app).unwrap();

    let res = handle(
        post_form("/admin/review/2/status", "residency_status=active"),
        &app,
    );

    assert!(matches!(res, Err(crate::errors::ServerError::Conflict(_))));
    assert!(app.controller().api().updates().is_empty());
}

#[test]
fn submit_after_remount_elsewhere_is_a_conflict() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1/update"), &app).unwrap();

    // another tab reloads the queue, which closes the form
    handle(get("/admin/review"), &app).unwrap();

    let res = handle(
        post_form("/admin/review/1/status", "residency_status=active"),
        &app,
    );

    assert!(matches!(res, Err(crate::errors::ServerError::Conflict(_))));
    assert!(app.controller().api().updates().is_empty());
}

#[test]
fn submit_after_leaving_the_page_is_a_conflict() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1/update"), &app).unwrap();
    handle(get("/"), &app).unwrap();

    let res = handle(
        post_form("/admin/review/1/status", "residency_status=active"),
        &app,
    );

    assert!(matches!(res, Err(crate::errors::ServerError::Conflict(_))));
    assert!(app.controller().api().updates().is_empty());
}

#[test]
fn percent_encoded_ids_are_decoded_as_path_segments() {
    let app = test_app(FakeResidentsApi::new().with_list(json!([
        { "id": "a b+c", "first_name": "Dina", "verification_status": "pending" }
    ])));
    handle(get("/admin/review"), &app).unwrap();

    let body = body_of(handle(get("/admin/review/a%20b%2Bc"), &app).unwrap());

    assert!(body.contains("details-modal"));
    assert!(body.contains("Dina"));
    assert!(handle(get("/admin/review/a+b+c"), &app).is_err());
}

#[test]
fn unknown_status_value_is_bad_request() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1/update"), &app).unwrap();

    let res = handle(
        post_form("/admin/review/1/status", "residency_status=archived"),
        &app,
    );

    assert!(matches!(res, Err(crate::errors::ServerError::BadRequest(_))));
}

#[test]
fn close_routes_close_only_their_modal() {
    let app = test_app(two_residents());
    handle(get("/admin/review"), &app).unwrap();
    handle(get("/admin/review/1"), &app).unwrap();
    handle(get("/admin/review/2/update"), &app).unwrap();

    let body = body_of(handle(post_form("/admin/review/details/close", ""), &app).unwrap());
    assert!(!body.contains("details-modal"));
    assert!(body.contains("update-modal"));

    let body = body_of(handle(post_form("/admin/review/update/close", ""), &app).unwrap());
    assert!(!body.contains("update-modal"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(FakeResidentsApi::new());
    assert!(matches!(
        handle(get("/dashboard"), &app),
        Err(crate::errors::ServerError::NotFound)
    ));
}
