//! Unit tests for storage functionality

use super::*;
use crate::catalog::{Position, PositionCatalog};
use crate::lineup::Game;
use crate::roster::{Player, Team};
use crate::stats::LineupSource;
use crate::{GameId, PlayerId, PositionCategory, TeamId};
use serde_json::{json, Value};

fn create_test_db() -> LineupDatabase {
    LineupDatabase::new_in_memory().unwrap()
}

fn test_team() -> Team {
    Team {
        id: TeamId::new(1),
        name: "Tigers".to_string(),
    }
}

fn test_game(id: u64, submitted_at: Option<u64>, lineup_data: Option<Value>) -> Game {
    Game {
        id: GameId::new(id),
        team_id: TeamId::new(1),
        opponent_name: Some("Hawks".to_string()),
        innings: 6,
        submitted_at,
        lineup_data,
    }
}

fn create_test_db_with_team() -> LineupDatabase {
    let db = create_test_db();
    db.upsert_team(&test_team()).unwrap();
    db
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_upsert_and_get_team() {
    let db = create_test_db();
    db.upsert_team(&test_team()).unwrap();

    let renamed = Team {
        id: TeamId::new(1),
        name: "Lions".to_string(),
    };
    db.upsert_team(&renamed).unwrap();

    assert_eq!(db.get_team(TeamId::new(1)).unwrap(), Some(renamed));
    assert_eq!(db.get_team(TeamId::new(2)).unwrap(), None);
}

#[test]
fn test_upsert_and_get_player() {
    let db = create_test_db_with_team();

    let mut player = Player::new(PlayerId::new(7), Some(TeamId::new(1))).with_name("Sam", "Rivera");
    player.jersey_number = Some("12".to_string());
    db.upsert_player(&player).unwrap();

    assert_eq!(db.get_player(PlayerId::new(7)).unwrap(), Some(player.clone()));

    player.jersey_number = None;
    db.upsert_player(&player).unwrap();
    assert_eq!(
        db.get_player(PlayerId::new(7)).unwrap().unwrap().jersey_number,
        None
    );
    assert_eq!(db.get_player(PlayerId::new(8)).unwrap(), None);
}

#[test]
fn test_player_without_team() {
    let db = create_test_db();
    let player = Player::new(PlayerId::new(3), None);
    db.upsert_player(&player).unwrap();

    assert_eq!(db.get_player(PlayerId::new(3)).unwrap().unwrap().team_id, None);
}

#[test]
fn test_player_with_unknown_team_is_rejected() {
    let db = create_test_db();
    let player = Player::new(PlayerId::new(3), Some(TeamId::new(99)));
    assert!(db.upsert_player(&player).is_err());
}

#[test]
fn test_players_for_team_ordered_by_id() {
    let db = create_test_db_with_team();
    for id in [9, 2, 5] {
        db.upsert_player(&Player::new(PlayerId::new(id), Some(TeamId::new(1))))
            .unwrap();
    }
    db.upsert_player(&Player::new(PlayerId::new(4), None)).unwrap();

    let ids: Vec<u64> = db
        .players_for_team(TeamId::new(1))
        .unwrap()
        .iter()
        .map(|p| p.id.as_u64())
        .collect();
    assert_eq!(ids, vec![2, 5, 9]);
}

#[test]
fn test_submitted_games_filter() {
    let db = create_test_db_with_team();
    let lineup = json!([{"player_id": 7, "innings": {"1": "P"}}]);

    db.upsert_game(&test_game(1, Some(100), Some(lineup.clone()))).unwrap();
    db.upsert_game(&test_game(2, None, Some(lineup.clone()))).unwrap();
    db.upsert_game(&test_game(3, Some(100), None)).unwrap();
    db.upsert_game(&test_game(4, Some(100), Some(json!([])))).unwrap();
    db.upsert_game(&test_game(5, Some(100), Some(json!({})))).unwrap();
    db.upsert_game(&test_game(6, Some(100), Some(Value::Null))).unwrap();
    db.upsert_game(&test_game(7, Some(100), Some(lineup))).unwrap();

    let ids: Vec<u64> = db
        .get_submitted_games(TeamId::new(1))
        .unwrap()
        .iter()
        .map(|g| g.id.as_u64())
        .collect();
    assert_eq!(ids, vec![1, 7]);

    assert_eq!(db.get_team_games(TeamId::new(1)).unwrap().len(), 7);
}

#[test]
fn test_game_round_trip_preserves_innings_order() {
    let db = create_test_db_with_team();
    let lineup = json!([{"player_id": 7, "innings": {"10": "C", "2": "P", "1": "SS"}, "batting_order": 4}]);
    let game = test_game(1, Some(100), Some(lineup));
    db.upsert_game(&game).unwrap();

    let loaded = db.get_submitted_games(TeamId::new(1)).unwrap();
    assert_eq!(loaded, vec![game]);

    let entry = loaded[0].entry_for(PlayerId::new(7)).unwrap().unwrap();
    assert_eq!(entry.positions().collect::<Vec<_>>(), vec!["C", "P", "SS"]);
}

#[test]
fn test_invalid_lineup_text_is_kept_as_string() {
    let db = create_test_db_with_team();
    db.upsert_game(&test_game(1, Some(100), Some(json!("{not json"))))
        .unwrap();

    let games = db.get_submitted_games(TeamId::new(1)).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].lineup_data, Some(json!("{not json")));
    assert!(games[0].entry_for(PlayerId::new(7)).is_err());
}

#[test]
fn test_encoded_lineup_string_is_stored_once() {
    let db = create_test_db_with_team();
    let encoded = r#"[{"player_id":7,"innings":{"1":"LF"}}]"#;
    db.upsert_game(&test_game(1, Some(100), Some(json!(encoded))))
        .unwrap();

    let games = db.get_submitted_games(TeamId::new(1)).unwrap();
    assert_eq!(
        games[0].lineup_data,
        Some(json!([{"player_id": 7, "innings": {"1": "LF"}}]))
    );
}

#[test]
fn test_unreadable_game_rows_are_skipped() {
    let db = create_test_db_with_team();
    for position in PositionCatalog::standard().positions() {
        db.upsert_position(position).unwrap();
    }
    let lineup = json!([{"player_id": 7, "innings": {"1": "P", "2": "CF"}}]);
    db.upsert_game(&test_game(1, Some(100), Some(lineup.clone())))
        .unwrap();
    db.upsert_game(&test_game(4, Some(100), Some(lineup))).unwrap();
    db.conn()
        .execute_batch(
            r#"INSERT INTO games (id, team_id, innings, submitted_at, lineup_data)
               VALUES (2, 1, 'six', 100, '[{"player_id": 7, "innings": {"1": "C"}}]');
               INSERT INTO games (id, team_id, innings, submitted_at, lineup_data)
               VALUES (3, 1, 6, -5, '[{"player_id": 7, "innings": {"1": "C"}}]');"#,
        )
        .unwrap();

    let ids: Vec<u64> = db
        .get_submitted_games(TeamId::new(1))
        .unwrap()
        .iter()
        .map(|g| g.id.as_u64())
        .collect();
    assert_eq!(ids, vec![1, 4]);

    let player = Player::new(PlayerId::new(7), Some(TeamId::new(1)));
    let stats = crate::stats::compute_from_source(&player, &db);
    assert_eq!(stats.total_innings_participated_in, 12);
    assert_eq!(stats.position_counts.get("P"), Some(2));
    assert_eq!(stats.position_counts.get("C"), None);
}

#[test]
fn test_positions_round_trip() {
    let db = create_test_db();
    for position in PositionCatalog::standard().positions() {
        db.upsert_position(position).unwrap();
    }
    db.upsert_position(&Position::new("P", PositionCategory::Other))
        .unwrap();

    let positions = db.get_positions().unwrap();
    assert_eq!(positions.len(), 13);
    assert_eq!(db.position_count().unwrap(), 13);
    assert_eq!(positions[0], Position::new("P", PositionCategory::Other));
    assert_eq!(positions[6].category, PositionCategory::Outfield);
}

#[test]
fn test_unknown_stored_category_reads_as_other() {
    let db = create_test_db();
    db.conn()
        .execute(
            "INSERT INTO positions (name, category) VALUES ('DH', 'UTILITY')",
            [],
        )
        .unwrap();

    assert_eq!(
        db.get_positions().unwrap(),
        vec![Position::new("DH", PositionCategory::Other)]
    );
}

#[test]
fn test_import_fixture() {
    let db = create_test_db();
    let fixture: Fixture = serde_json::from_value(json!({
        "positions": [{"name": "P", "category": "INF"}, {"name": "CF", "category": "OF"}],
        "teams": [{"id": 1, "name": "Tigers"}],
        "players": [
            {"id": 7, "team_id": 1, "first_name": "Sam", "last_name": "Rivera"},
            {"id": 8, "team_id": 1}
        ],
        "games": [
            {"id": 1, "team_id": 1, "innings": 6, "submitted_at": 100,
             "lineup_data": [{"player_id": 7, "innings": {"1": "P"}}]}
        ]
    }))
    .unwrap();

    let summary = db.import_fixture(&fixture).unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            positions: 2,
            teams: 1,
            players: 2,
            games: 1
        }
    );
    assert_eq!(db.players_for_team(TeamId::new(1)).unwrap().len(), 2);
    assert_eq!(db.get_submitted_games(TeamId::new(1)).unwrap().len(), 1);
}

#[test]
fn test_failed_import_rolls_back() {
    let db = create_test_db();
    let fixture: Fixture = serde_json::from_value(json!({
        "teams": [{"id": 1, "name": "Tigers"}],
        "players": [{"id": 7, "team_id": 2}]
    }))
    .unwrap();

    assert!(db.import_fixture(&fixture).is_err());
    assert_eq!(db.get_team(TeamId::new(1)).unwrap(), None);
}

#[test]
fn test_clear_all_data() {
    let db = create_test_db_with_team();
    db.upsert_game(&test_game(1, Some(100), Some(json!([{"player_id": 1}]))))
        .unwrap();
    db.upsert_position(&Position::new("P", PositionCategory::Infield))
        .unwrap();

    db.clear_all_data().unwrap();

    assert_eq!(db.get_team(TeamId::new(1)).unwrap(), None);
    assert!(db.get_team_games(TeamId::new(1)).unwrap().is_empty());
    assert_eq!(db.position_count().unwrap(), 0);
}

#[test]
fn test_database_as_lineup_source() {
    let db = create_test_db_with_team();
    db.upsert_game(&test_game(1, Some(100), Some(json!([{"player_id": 1}]))))
        .unwrap();
    db.upsert_position(&Position::new("SS", PositionCategory::Infield))
        .unwrap();

    assert_eq!(db.find_team(TeamId::new(1)).unwrap(), Some(test_team()));
    assert_eq!(db.submitted_games(TeamId::new(1)).unwrap().len(), 1);
    assert_eq!(db.positions().unwrap().len(), 1);
}
