// ETag / If-Match / If-None-Match behavior on series endpoints.

use actix_web::http::header::{ETAG, IF_MATCH, IF_NONE_MATCH};
use actix_web::test;
use serde_json::json;
use veto_backend::http::etag::series_etag;

use crate::common::{assert_problem_details_structure, read_json};
use crate::support::app_builder::{create_test_app, test_state};
use crate::support::draft::{action_body, create_series, series_in_ban_phase, BANS, TEAM_A, TEAM_B};

fn etag_of(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(ETAG)
        .expect("ETag header should be present")
        .to_str()
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn every_response_carries_the_current_etag() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post().uri("/api/series").to_request();
    let resp = test::call_service(&app, req).await;
    let etag = etag_of(&resp);
    let body = read_json(resp, 201).await;
    let id = body["id"].as_i64().unwrap();
    assert_eq!(etag, series_etag(id, 0));

    let req = test::TestRequest::post()
        .uri(&format!("/api/series/{id}/assign_roles"))
        .insert_header((IF_MATCH, etag))
        .set_json(json!({ "team_a": TEAM_A, "team_b": TEAM_B }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(etag_of(&resp), series_etag(id, 1));
    read_json(resp, 200).await;
}

#[actix_web::test]
async fn stale_if_match_is_optimistic_lock_conflict() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;

    // Version is 2 after assign + confirm.
    let req = test::TestRequest::post()
        .uri(&format!("/api/series/{id}/ban"))
        .insert_header((IF_MATCH, series_etag(id, 1)))
        .set_json(action_body(BANS[0].0, BANS[0].1, BANS[0].2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 409, "OPTIMISTIC_LOCK", "expected version 1").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/series/{id}/ban"))
        .insert_header((IF_MATCH, series_etag(id, 2)))
        .set_json(action_body(BANS[0].0, BANS[0].1, BANS[0].2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(etag_of(&resp), series_etag(id, 3));
}

#[actix_web::test]
async fn if_match_for_another_series_is_rejected() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;
    let other = id + 1_000;

    let req = test::TestRequest::post()
        .uri(&format!("/api/series/{id}/ban"))
        .insert_header((IF_MATCH, series_etag(other, 2)))
        .set_json(action_body(BANS[0].0, BANS[0].1, BANS[0].2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 409, "OPTIMISTIC_LOCK", &format!("series {other}"))
        .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/series/{id}/ban"))
        .insert_header((IF_MATCH, r#""series-v2""#))
        .set_json(action_body(BANS[0].0, BANS[0].1, BANS[0].2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_HEADER", "").await;

    let body = read_json(
        test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/series/{id}"))
                .to_request(),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(body["version"], 2);
    assert_eq!(body["actions"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn wildcard_if_match_is_unconditional() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/series/{id}/reset"))
        .insert_header((IF_MATCH, "*"))
        .to_request();
    let body = read_json(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["phase"], "IDLE");
}

#[actix_web::test]
async fn malformed_if_match_is_invalid_header() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = create_series(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/series/{id}/assign_roles"))
        .insert_header((IF_MATCH, "\"not-an-etag\""))
        .set_json(json!({ "team_a": TEAM_A, "team_b": TEAM_B }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_HEADER", "Invalid ETag format").await;
}

#[actix_web::test]
async fn if_none_match_with_current_etag_is_not_modified() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = create_series(&app).await;
    let etag = series_etag(id, 0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/series/{id}"))
        .insert_header((IF_NONE_MATCH, etag.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 304);
    assert_eq!(etag_of(&resp), etag);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/series/{id}"))
        .insert_header((IF_NONE_MATCH, series_etag(id, 7)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}
