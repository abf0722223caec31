//! Tests for the on-disk local store

use matchday::{
    storage::{fallback_leagues, FavoriteTeam, League, LocalStore, StoreKey},
    LeagueId, ResourceType,
};
use serde_json::json;

fn league(code: &str) -> LeagueId {
    LeagueId::new(code).unwrap()
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = LocalStore::open(&path).unwrap();
        store
            .put_raw(
                &StoreKey::resource(ResourceType::PastResults, &league("PL")),
                &json!([{ "id": 1 }]),
            )
            .unwrap();
        store
            .save_favorite_team(&FavoriteTeam {
                name: "Arsenal FC".to_string(),
                league_id: league("PL"),
                crest: "https://crests.football-data.org/57.png".to_string(),
            })
            .unwrap();
    }

    let reopened = LocalStore::open(&path).unwrap();
    assert_eq!(
        reopened
            .get_raw(&StoreKey::resource(ResourceType::PastResults, &league("PL")))
            .unwrap(),
        Some(json!([{ "id": 1 }]))
    );

    let favorite = reopened.favorite_team().unwrap().unwrap();
    assert_eq!(favorite.name, "Arsenal FC");
    assert_eq!(favorite.league_id, league("PL"));
    assert_eq!(favorite.crest, "https://crests.football-data.org/57.png");
}

#[test]
fn test_favorite_wire_format() {
    let store = LocalStore::new_in_memory().unwrap();
    store
        .save_favorite_team(&FavoriteTeam {
            name: "AC Milan".to_string(),
            league_id: league("SA"),
            crest: String::new(),
        })
        .unwrap();

    assert_eq!(
        store.get_raw(&StoreKey::FavoriteTeam).unwrap(),
        Some(json!({ "name": "AC Milan", "leagueId": "SA", "crest": "" }))
    );
}

#[test]
fn test_key_layout() {
    let store = LocalStore::new_in_memory().unwrap();
    for resource in ResourceType::REFRESHED {
        store
            .put_list::<serde_json::Value>(resource, &league("BL1"), &[])
            .unwrap();
    }
    store.record_installed_version("0.1.0").unwrap();

    assert_eq!(
        store.keys().unwrap(),
        vec![
            "installedVersion",
            "leagueTable_BL1",
            "pastResults_BL1",
            "upcomingFixtures_BL1",
        ]
    );
}

#[test]
fn test_catalogue_fallback_and_override() {
    let store = LocalStore::new_in_memory().unwrap();
    assert_eq!(store.available_leagues().unwrap(), fallback_leagues());

    // An empty stored list still falls back.
    store.save_available_leagues(&[]).unwrap();
    assert_eq!(store.available_leagues().unwrap().len(), 11);

    let custom = vec![League {
        id: league("DED"),
        name: "Eredivisie".to_string(),
        country: "Netherlands".to_string(),
    }];
    store.save_available_leagues(&custom).unwrap();
    assert_eq!(store.available_leagues().unwrap(), custom);
}
