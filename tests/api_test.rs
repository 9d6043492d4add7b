//! Тесты внешнего API: строковые карты на входе, DTO на выходе.

use poker_equity::api::{run_query, run_query_json, ApiError, EquityQueryDto, EquityResponseDto};
use poker_equity::domain::CardParseError;
use poker_equity::engine::EquityError;
use poker_equity::eval::EvalError;

fn query(hole: &[&str], board: &[&str], opponents: u32, trials: u32, seed: Option<u64>) -> EquityQueryDto {
    EquityQueryDto {
        hole: hole.iter().map(|s| s.to_string()).collect(),
        board: board.iter().map(|s| s.to_string()).collect(),
        opponents,
        trials,
        seed,
    }
}

#[test]
fn run_query_returns_equity_and_counters() {
    let q = query(&["As", "Ad"], &["Kd", "Qd", "Jd"], 1, 5_000, Some(42));
    let resp = run_query(&q).unwrap();

    assert_eq!(resp.hole, q.hole);
    assert_eq!(resp.board, q.board);
    assert_eq!(resp.opponents, 1);
    assert_eq!(resp.trials, 5_000);
    assert_eq!(resp.wins + resp.ties + resp.losses, 5_000);
    assert!((78..=95).contains(&resp.equity), "equity {}", resp.equity);

    // тот же seed — тот же ответ
    assert_eq!(run_query(&q).unwrap(), resp);
}

#[test]
fn invalid_input_maps_to_invalid_input_error() {
    let bad_card = query(&["Xx", "Ad"], &[], 1, 100, None);
    assert!(matches!(run_query(&bad_card), Err(ApiError::InvalidInput(_))));

    let dup = query(&["As", "Ad"], &["As"], 1, 100, None);
    assert!(matches!(run_query(&dup), Err(ApiError::InvalidInput(_))));

    let zero_trials = query(&["As", "Ad"], &[], 1, 0, None);
    assert!(matches!(run_query(&zero_trials), Err(ApiError::InvalidInput(_))));
}

#[test]
fn json_roundtrip_with_defaults() {
    let out = run_query_json(r#"{ "hole": ["As", "Ah"], "board": ["2c", "7d", "Js"], "trials": 2000, "seed": 1 }"#)
        .unwrap();
    let resp: EquityResponseDto = serde_json::from_str(&out).unwrap();

    assert_eq!(resp.opponents, 1, "opponents по умолчанию = 1");
    assert_eq!(resp.trials, 2_000);
    assert!(resp.equity > 75);
}

#[test]
fn json_trials_default_to_ten_thousand() {
    let q: EquityQueryDto = serde_json::from_str(r#"{ "hole": ["As", "Ah"] }"#).unwrap();
    assert_eq!(q.trials, 10_000);
    assert_eq!(q.opponents, 1);
    assert!(q.board.is_empty());
    assert!(q.seed.is_none());
}

#[test]
fn malformed_json_is_bad_request() {
    assert!(matches!(run_query_json("{ not json"), Err(ApiError::BadRequest(_))));
    assert!(matches!(run_query_json(r#"{ "board": [] }"#), Err(ApiError::BadRequest(_))));
}

#[test]
fn api_error_from_equity_error() {
    let e: ApiError = EquityError::InvalidCard(CardParseError::InvalidCard("Zz".into())).into();
    assert!(matches!(e, ApiError::InvalidInput(msg) if msg.contains("Zz")));

    let e: ApiError = EquityError::Config("x".into()).into();
    assert!(matches!(e, ApiError::BadRequest(_)));

    let e: ApiError = EquityError::InvalidHand(EvalError::InvalidHand { len: 3 }).into();
    assert!(matches!(e, ApiError::Internal(_)));
}
