// End-to-end draft flows over HTTP.
//
// Covers the lifecycle IDLE → SERIES_SETUP → BAN_PHASE → PICK_WINDOW → SERIES_COMPLETE,
// the rejection kinds surfaced mid-draft, undo/reset and series listing/deletion.

use serde_json::{json, Value};

use crate::common::{assert_problem_details_structure, read_json};
use crate::support::app_builder::{create_test_app, test_state};
use crate::support::draft::{
    act, apply_bans, create_series, get, post_empty, post_json, series_in_ban_phase, AQUARIUS,
    BANS, BO3_PICKS, CTF, ORIGIN, SLAYER, TEAM_A, TEAM_B,
};

#[actix_web::test]
async fn created_series_is_idle() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let resp = post_empty(&app, "/api/series").await;
    let body = read_json(resp, 201).await;

    assert_eq!(body["phase"], "IDLE");
    assert_eq!(body["actions"], json!([]));
    assert_eq!(body["version"], 0);
    assert!(body["next_turn"].is_null());

    let id = body["id"].as_i64().unwrap();
    let state = read_json(get(&app, &format!("/api/series/{id}/state")).await, 200).await;
    assert_eq!(state, json!({ "state": "IDLE" }));
}

#[actix_web::test]
async fn assign_then_confirm_reaches_ban_phase_with_b_first() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = create_series(&app).await;

    let resp = post_json(
        &app,
        &format!("/api/series/{id}/assign_roles"),
        json!({ "team_a": TEAM_A, "team_b": TEAM_B }),
    )
    .await;
    let body = read_json(resp, 200).await;
    assert_eq!(body["phase"], "SERIES_SETUP");
    assert_eq!(body["team_a"], TEAM_A);

    let resp = post_json(
        &app,
        &format!("/api/series/{id}/confirm_tsd"),
        json!({ "series_type": "Bo7" }),
    )
    .await;
    let body = read_json(resp, 200).await;
    assert_eq!(body["phase"], "BAN_PHASE");
    assert_eq!(body["ruleset"], "TSD_8s_v2");
    assert_eq!(body["bans_total"], 7);
    assert_eq!(body["bans_remaining"], 7);
    assert_eq!(body["games"].as_array().unwrap().len(), 7);

    let turn = &body["next_turn"];
    assert_eq!(turn["kind"], "BAN");
    assert_eq!(turn["team"], "B");
    assert_eq!(turn["team_name"], TEAM_B);
    assert_eq!(turn["family"], "OBJECTIVE");
    assert_eq!(turn["ban_number"], 1);
}

#[actix_web::test]
async fn first_ban_is_recorded_and_turn_flips_to_a() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo7").await;

    let body = read_json(act(&app, id, "ban", BANS[0]).await, 200).await;

    let actions = body["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["sequence"], 1);
    assert_eq!(actions[0]["kind"], "BAN");
    assert_eq!(actions[0]["team"], "B");
    assert_eq!(actions[0]["map"], "Aquarius");
    assert_eq!(actions[0]["mode"], "Capture the Flag");
    assert_eq!(body["next_turn"]["team"], "A");
    assert_eq!(body["bans_remaining"], 6);
}

#[actix_web::test]
async fn team_may_be_named_instead_of_lettered() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;

    let resp = act(&app, id, "ban", ("  Bravo ", AQUARIUS, Some(CTF))).await;
    let body = read_json(resp, 200).await;
    assert_eq!(body["actions"][0]["team"], "B");
}

#[actix_web::test]
async fn duplicate_ban_is_combo_unavailable() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo7").await;
    read_json(act(&app, id, "ban", BANS[0]).await, 200).await;

    let resp = act(&app, id, "ban", ("A", AQUARIUS, Some(CTF))).await;
    assert_problem_details_structure(resp, 422, "COMBO_UNAVAILABLE", "").await;

    let body = read_json(get(&app, &format!("/api/series/{id}")).await, 200).await;
    assert_eq!(body["actions"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn wrong_team_is_wrong_turn() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;

    let resp = act(&app, id, "ban", ("A", AQUARIUS, Some(CTF))).await;
    assert_problem_details_structure(resp, 422, "WRONG_TURN", "").await;
}

#[actix_web::test]
async fn slayer_pick_for_objective_slot_is_type_mismatch() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;
    apply_bans(&app, id).await;

    let resp = act(&app, id, "pick", ("B", ORIGIN, Some(SLAYER))).await;
    assert_problem_details_structure(resp, 422, "TYPE_MISMATCH", "").await;
}

#[actix_web::test]
async fn full_bo3_completes_exactly_at_last_pick() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;
    apply_bans(&app, id).await;

    let body = read_json(get(&app, &format!("/api/series/{id}")).await, 200).await;
    assert_eq!(body["phase"], "PICK_WINDOW");
    assert_eq!(body["next_turn"]["kind"], "PICK");
    assert_eq!(body["next_turn"]["game_number"], 1);

    let mut last = Value::Null;
    for (i, pick) in BO3_PICKS.into_iter().enumerate() {
        last = read_json(act(&app, id, "pick", pick).await, 200).await;
        let expected = if i + 1 == BO3_PICKS.len() {
            "SERIES_COMPLETE"
        } else {
            "PICK_WINDOW"
        };
        assert_eq!(last["phase"], expected, "after pick {}", i + 1);
    }

    assert!(last["next_turn"].is_null());
    assert_eq!(last["actions"].as_array().unwrap().len(), 10);
    let games = last["games"].as_array().unwrap();
    assert_eq!(games[0]["pick"]["map"], "Fortress");
    assert_eq!(games[1]["pick"]["mode"], "Slayer");
    assert_eq!(games[1]["picker_name"], TEAM_A);
    assert_eq!(games[2]["pick"]["map"], "Live Fire");

    let resp = act(&app, id, "pick", ("A", AQUARIUS, Some(SLAYER))).await;
    assert_problem_details_structure(resp, 409, "INVALID_TRANSITION", "").await;
}

#[actix_web::test]
async fn undo_removes_last_action_and_rejects_empty_history() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo5").await;

    let resp = post_empty(&app, &format!("/api/series/{id}/undo")).await;
    assert_problem_details_structure(resp, 409, "EMPTY_HISTORY", "").await;

    read_json(act(&app, id, "ban", BANS[0]).await, 200).await;
    let body = read_json(post_empty(&app, &format!("/api/series/{id}/undo")).await, 200).await;
    assert_eq!(body["phase"], "BAN_PHASE");
    assert_eq!(body["actions"], json!([]));
    assert_eq!(body["next_turn"]["team"], "B");
}

#[actix_web::test]
async fn undo_is_refused_before_the_draft_starts() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = create_series(&app).await;

    let resp = post_empty(&app, &format!("/api/series/{id}/undo")).await;
    assert_problem_details_structure(resp, 409, "INVALID_TRANSITION", "").await;
}

#[actix_web::test]
async fn reset_returns_to_idle() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let id = series_in_ban_phase(&app, "Bo3").await;
    read_json(act(&app, id, "ban", BANS[0]).await, 200).await;

    let body = read_json(post_empty(&app, &format!("/api/series/{id}/reset")).await, 200).await;
    assert_eq!(body["phase"], "IDLE");
    assert_eq!(body["actions"], json!([]));
    assert_eq!(body["team_a"], "");
    assert!(body["series_type"].is_null());

    let resp = post_empty(&app, &format!("/api/series/{id}/reset")).await;
    assert_problem_details_structure(resp, 409, "INVALID_TRANSITION", "").await;
}

#[actix_web::test]
async fn list_is_newest_first_and_delete_removes() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let first = create_series(&app).await;
    let second = create_series(&app).await;

    let list = read_json(get(&app, "/api/series").await, 200).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, first]);

    let req = actix_web::test::TestRequest::delete()
        .uri(&format!("/api/series/{first}"))
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let resp = get(&app, &format!("/api/series/{first}")).await;
    assert_problem_details_structure(resp, 404, "SERIES_NOT_FOUND", "").await;
}
