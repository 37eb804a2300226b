use overdrive_core::{evaluate, format_command, Action, GameState, RaceRules, Rule, StateError};
use serde_json::{json, Value};

/// Builds the engine's JSON for one round. Lanes use one character per block
/// (`.` clear, `m` mud, `w` wall, `b` boost, `f` finish, `c` cyber truck,
/// `_` missing cell).
fn snapshot(round: u32, player: Value, opponent: Value, start_block: i32, lanes: &[&str]) -> Value {
    let world_map: Vec<Value> = lanes
        .iter()
        .zip(1..)
        .map(|(row, lane)| {
            row.chars()
                .zip(start_block..)
                .map(|(symbol, block)| {
                    let code = match symbol {
                        '_' => return Value::Null,
                        '.' | 'c' => 0,
                        'm' => 1,
                        'o' => 2,
                        'f' => 4,
                        'b' => 5,
                        'w' => 6,
                        other => panic!("unknown lane symbol {other:?}"),
                    };
                    let truck = symbol == 'c';
                    json!({
                        "position": { "y": lane, "x": block },
                        "surfaceObject": code,
                        "occupiedByPlayerId": 0,
                        "isOccupiedByCyberTruck": truck,
                    })
                })
                .collect()
        })
        .collect();

    json!({
        "currentRound": round,
        "maxRounds": 600,
        "player": player,
        "opponent": opponent,
        "worldMap": world_map,
    })
}

fn player(lane: i32, block: i32, speed: i32, damage: i32, powerups: &[&str]) -> Value {
    let boosting = speed == 15;
    let boost_counter = if boosting { 5 } else { 0 };
    json!({
        "id": 1,
        "position": { "y": lane, "x": block },
        "speed": speed,
        "state": "READY",
        "damage": damage,
        "powerups": powerups,
        "boosting": boosting,
        "boostCounter": boost_counter,
    })
}

fn opponent(lane: i32, block: i32, speed: i32) -> Value {
    json!({ "id": 2, "position": { "y": lane, "x": block }, "speed": speed })
}

fn parse(value: Value) -> GameState {
    let state: GameState = serde_json::from_value(value).unwrap();
    state.validate(&RaceRules::default()).unwrap();
    state
}

fn row(len: usize) -> String {
    ".".repeat(len)
}

#[test]
fn parses_engine_json_with_missing_cells_and_extra_fields() {
    let state = parse(snapshot(
        7,
        player(3, 100, 6, 1, &["OIL", "TWEET"]),
        opponent(1, 90, 5),
        95,
        &["....._..", "........", ".....mw.", "........"],
    ));
    assert_eq!(state.current_round, 7);
    assert_eq!(state.player.damage, 1);
    assert_eq!(state.opponent.damage, 0);
    assert!(state.opponent.powerups.is_empty());
    assert!(state.world_map[0][5].is_none());
    assert_eq!(state.track().start_block(), 95);
}

#[test]
fn unknown_surface_code_is_rejected() {
    let mut value = snapshot(1, player(1, 0, 5, 0, &[]), opponent(2, 0, 5), 0, &["..", "..", "..", ".."]);
    value["worldMap"][0][1]["surfaceObject"] = json!(42);
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("42"), "{err}");
}

#[test]
fn three_lane_map_fails_validation() {
    let value = snapshot(1, player(1, 0, 5, 0, &[]), opponent(2, 0, 5), 0, &["..", "..", ".."]);
    let state: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(
        state.validate(&RaceRules::default()),
        Err(StateError::LaneCountMismatch {
            expected: 4,
            found: 3
        })
    );
}

#[test]
fn top_speed_on_open_lane_ignores_walled_neighbours() {
    let open = row(20);
    let walled = format!("...w{}", row(16));
    let state = parse(snapshot(
        30,
        player(2, 100, 9, 0, &[]),
        opponent(4, 60, 6),
        100,
        &[&walled, &open, &walled, &open],
    ));
    let verdict = evaluate(&state, &RaceRules::default());
    assert_eq!(verdict.action, Action::Accelerate);
    assert_eq!(verdict.rule, Rule::Fallback);
}

#[test]
fn heavy_damage_fixes_even_while_boosting_into_a_wall() {
    let blocked = format!("..w{}", row(17));
    let state = parse(snapshot(
        40,
        player(2, 200, 15, 2, &["LIZARD"]),
        opponent(1, 180, 9),
        200,
        &[&row(20), &blocked, &row(20), &row(20)],
    ));
    assert_eq!(
        format_command(state.current_round, &evaluate(&state, &RaceRules::default()).action),
        "C;40;FIX"
    );
}

#[test]
fn rear_end_position_forces_a_dodge() {
    let state = parse(snapshot(
        12,
        player(1, 99, 9, 0, &[]),
        opponent(1, 100, 9),
        95,
        &[&row(20), &row(20), &row(20), &row(20)],
    ));
    let verdict = evaluate(&state, &RaceRules::default());
    assert_eq!(verdict.rule, Rule::Dodge);
    assert_eq!(verdict.action, Action::TurnRight);
}

#[test]
fn trailing_car_tweets_ahead_of_a_slow_opponent() {
    let state = parse(snapshot(
        20,
        player(1, 40, 9, 0, &["TWEET"]),
        opponent(3, 50, 2),
        40,
        &[&row(20), &row(20), &row(20), &row(20)],
    ));
    let verdict = evaluate(&state, &RaceRules::default());
    assert_eq!(verdict.action, Action::Tweet { lane: 3, block: 56 });
    assert_eq!(verdict.rule, Rule::OffenseBehind);
    assert_eq!(
        format_command(state.current_round, &verdict.action),
        "C;20;USE_TWEET 3 56"
    );
}

#[test]
fn lizard_near_the_finish_jumps_regardless_of_landing() {
    let state = parse(snapshot(
        150,
        player(2, 1495, 10, 0, &["LIZARD"]),
        opponent(3, 1400, 9),
        1490,
        &["..........f", "._.....m..f", "..........f", "..........f"],
    ));
    let verdict = evaluate(&state, &RaceRules::default());
    assert_eq!(verdict.action, Action::Lizard);
    assert_eq!(verdict.rule, Rule::Dodge);
}

#[test]
fn cyber_truck_ahead_is_steered_around() {
    let state = parse(snapshot(
        9,
        player(1, 20, 9, 0, &[]),
        opponent(4, 10, 9),
        20,
        &["....c...............", &row(20), &row(20), &row(20)],
    ));
    let verdict = evaluate(&state, &RaceRules::default());
    assert_eq!(verdict.action, Action::TurnRight);
    assert_eq!(verdict.rule, Rule::Dodge);
}

#[test]
fn shorter_track_rules_change_the_lizard_decision() {
    let value = snapshot(
        3,
        player(2, 100, 6, 0, &["LIZARD"]),
        opponent(4, 50, 6),
        100,
        &[&row(20), "..m.w.m.............", &row(20), &row(20)],
    );
    let state = parse(value);

    let verdict = evaluate(&state, &RaceRules::default());
    assert_eq!(verdict.rule, Rule::Dodge);
    assert_ne!(verdict.action, Action::Lizard);

    let short = RaceRules {
        finish_block: 104,
        ..RaceRules::default()
    };
    assert_eq!(evaluate(&state, &short).action, Action::Lizard);
}

#[test]
fn decisions_do_not_depend_on_call_history() {
    let state = parse(snapshot(
        5,
        player(2, 50, 6, 1, &["BOOST", "OIL"]),
        opponent(2, 48, 9),
        45,
        &[&row(25), &row(25), &row(25), &row(25)],
    ));
    let rules = RaceRules::default();
    let first = evaluate(&state, &rules);
    for _ in 0..3 {
        assert_eq!(evaluate(&state, &rules), first);
    }
}
