// Catalog endpoints: maps, game modes, flat and grouped combos.

use std::sync::Arc;

use serde_json::Value;
use veto_backend::catalog::UnavailableCatalog;

use crate::common::{assert_problem_details_structure, read_json};
use crate::support::app_builder::{create_test_app, test_state, test_state_with_catalog};
use crate::support::draft::{act, get, series_in_ban_phase, BANS};

#[actix_web::test]
async fn maps_list_modes_per_map() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let maps = read_json(get(&app, "/api/maps").await, 200).await;
    let maps = maps.as_array().unwrap();
    assert_eq!(maps.len(), 9);

    let aquarius = maps.iter().find(|m| m["name"] == "Aquarius").unwrap();
    let modes: Vec<&str> = aquarius["modes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(modes, vec!["Capture the Flag", "Neutral Bomb", "Slayer"]);
}

#[actix_web::test]
async fn game_modes_are_sorted_and_flag_slayer() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let modes = read_json(get(&app, "/api/gamemodes").await, 200).await;
    let names: Vec<&str> = modes
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Capture the Flag",
            "King of the Hill",
            "Neutral Bomb",
            "Oddball",
            "Slayer",
            "Strongholds"
        ]
    );
    let slayer: Vec<&Value> = modes
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["is_slayer"] == true)
        .collect();
    assert_eq!(slayer.len(), 1);
    assert_eq!(slayer[0]["name"], "Slayer");
}

#[actix_web::test]
async fn flat_combos_filter_by_type_and_mode() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let all = read_json(get(&app, "/api/maps/combos").await, 200).await;
    assert_eq!(all.as_array().unwrap().len(), 20);

    let slayer = read_json(get(&app, "/api/maps/combos?type=slayer").await, 200).await;
    let slayer = slayer.as_array().unwrap();
    assert_eq!(slayer.len(), 6);
    assert!(slayer.iter().all(|c| c["is_objective"] == false));
    assert_eq!(slayer[0]["slug"], "aquarius--slayer");

    let oddball = read_json(get(&app, "/api/maps/combos?mode=oddball").await, 200).await;
    let maps: Vec<&str> = oddball
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["map"].as_str().unwrap())
        .collect();
    assert_eq!(maps, vec!["Lattice", "Live Fire", "Recharge"]);
}

#[actix_web::test]
async fn grouped_combos_split_objective_and_slayer() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let grouped = read_json(get(&app, "/api/maps/combos/grouped").await, 200).await;
    let objective = grouped["objective"].as_array().unwrap();
    assert_eq!(objective.len(), 5);
    assert_eq!(objective[0]["mode"], "Capture the Flag");
    assert_eq!(objective[0]["combos"].as_array().unwrap().len(), 4);
    assert_eq!(grouped["slayer"].as_array().unwrap().len(), 6);

    let only_slayer =
        read_json(get(&app, "/api/maps/combos/grouped?type=slayer").await, 200).await;
    assert!(only_slayer["objective"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn unknown_combo_type_is_bad_request() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let resp = get(&app, "/api/maps/combos?type=swat").await;
    assert_problem_details_structure(resp, 400, "BAD_REQUEST", "swat").await;
}

#[actix_web::test]
async fn unavailable_catalog_is_503_and_leaves_series_untouched() {
    let state = test_state_with_catalog(Arc::new(UnavailableCatalog));
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = get(&app, "/api/maps").await;
    assert_problem_details_structure(resp, 503, "CATALOG_UNAVAILABLE", "").await;

    // Lifecycle events that need no reference data still work.
    let id = series_in_ban_phase(&app, "Bo3").await;
    let resp = act(&app, id, "ban", BANS[0]).await;
    assert_problem_details_structure(resp, 503, "CATALOG_UNAVAILABLE", "").await;

    let body = read_json(get(&app, &format!("/api/series/{id}")).await, 200).await;
    assert_eq!(body["phase"], "BAN_PHASE");
    assert_eq!(body["actions"].as_array().unwrap().len(), 0);
}
