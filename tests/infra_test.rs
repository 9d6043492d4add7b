//! Тесты набора задач (infra::problems).

use std::fs;

use poker_equity::domain::parse_cards;
use poker_equity::engine::EquityError;
use poker_equity::infra::{DeterministicRng, Problem, ProblemError, ProblemSet};

const CSV: &str = "\
player_card_1,player_card_2,flop_1,flop_2,flop_3
As.png,Ad.png,Kd.png,Qd.png,Jd.png
Ah.png,Kh.png,2c.png,7d.png,Th.png

9s.png,9c.png,Ks.png,8d.png,3h.png
";

#[test]
fn parses_asset_names_and_skips_blank_lines() {
    let set = ProblemSet::from_csv_str(CSV).unwrap();
    assert_eq!(set.len(), 3);

    let first = set.get(0).unwrap();
    assert_eq!(first.id, 0);
    assert_eq!(first.player.to_vec(), parse_cards(&["As", "Ad"]).unwrap());
    assert_eq!(first.flop.to_vec(), parse_cards(&["Kd", "Qd", "Jd"]).unwrap());

    // пустая строка не сдвигает нумерацию задач
    let third = set.get(2).unwrap();
    assert_eq!(third.id, 2);
    assert_eq!(third.player.to_vec(), parse_cards(&["9s", "9c"]).unwrap());

    assert!(set.get(3).is_none());
    assert_eq!(set.iter().count(), 3);
}

#[test]
fn extra_columns_and_quotes_are_tolerated() {
    let csv = "a,b,c,d,e,f\n\"As.png\",\"Ad.png\",Kd.png,Qd.png,Jd.png,whatever\n";
    let set = ProblemSet::from_csv_str(csv).unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn quoted_cell_may_contain_commas() {
    let csv = "a,b,c,d,e,note\nAs.png,Ad.png,Kd.png,Qd.png,Jd.png,\"nut flush draw, overpair\"\n";
    let set = ProblemSet::from_csv_str(csv).unwrap();
    assert_eq!(set.len(), 1);

    // сами карты тоже могут быть в кавычках
    let csv = "a,b,c,d,e\n\"As.png\",\"Ad.png\",\"Kd.png\",\"Qd.png\",\"Jd.png\"\n";
    assert_eq!(ProblemSet::from_csv_str(csv).unwrap().get(0).unwrap().flop[2].to_string(), "Jd");
}

/// Файл без заголовка: первая строка — задача, молча терять её нельзя.
#[test]
fn missing_header_is_an_error() {
    let csv = "As.png,Ad.png,Kd.png,Qd.png,Jd.png\nAh.png,Kh.png,2c.png,7d.png,Th.png\n";
    assert!(matches!(
        ProblemSet::from_csv_str(csv),
        Err(ProblemError::MissingHeader(line)) if line.starts_with("As.png")
    ));
}

#[test]
fn windows_line_endings() {
    let csv = "h1,h2,h3,h4,h5\r\nAs.png,Ad.png,Kd.png,Qd.png,Jd.png\r\n";
    assert_eq!(ProblemSet::from_csv_str(csv).unwrap().len(), 1);
}

#[test]
fn bad_card_reports_line_number() {
    let csv = "h1,h2,h3,h4,h5\nAs.png,Ad.png,Kd.png,Qd.png,Jd.png\nAs.png,Xx.png,Kd.png,Qd.png,Jd.png\n";
    match ProblemSet::from_csv_str(csv) {
        Err(ProblemError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn short_row_and_duplicate_cards_are_rejected() {
    let short = "h\nAs.png,Ad.png,Kd.png\n";
    assert!(matches!(
        ProblemSet::from_csv_str(short),
        Err(ProblemError::Parse { line: 2, .. })
    ));

    let dup = "h\nAs.png,Ad.png,As.png,Qd.png,Jd.png\n";
    assert!(matches!(
        ProblemSet::from_csv_str(dup),
        Err(ProblemError::Parse { line: 2, .. })
    ));
}

#[test]
fn header_only_is_empty() {
    assert!(matches!(
        ProblemSet::from_csv_str("h1,h2,h3,h4,h5\n"),
        Err(ProblemError::Empty)
    ));
}

#[test]
fn load_from_file_and_missing_file() {
    let path = std::env::temp_dir().join(format!("poker_equity_problems_{}.csv", std::process::id()));
    fs::write(&path, CSV).unwrap();

    let set = ProblemSet::load(&path).unwrap();
    assert_eq!(set.len(), 3);
    fs::remove_file(&path).unwrap();

    assert!(matches!(ProblemSet::load(&path), Err(ProblemError::Io { .. })));
}

#[test]
fn pick_random_is_reproducible_and_in_range() {
    let set = ProblemSet::from_csv_str(CSV).unwrap();

    let mut r1 = DeterministicRng::from_seed(10);
    let mut r2 = DeterministicRng::from_seed(10);
    for _ in 0..50 {
        let a = set.pick_random(&mut r1).unwrap();
        let b = set.pick_random(&mut r2).unwrap();
        assert_eq!(a, b);
        assert!(a.id < set.len());
    }

    let empty = ProblemSet::new(vec![]);
    assert!(empty.is_empty());
    assert!(empty.pick_random(&mut r1).is_none());
}

#[test]
fn problem_builds_equity_request() {
    let set = ProblemSet::from_csv_str(CSV).unwrap();
    let problem: &Problem = set.get(1).unwrap();

    let request = problem.request(3).unwrap();
    assert_eq!(request.hole(), problem.player);
    assert_eq!(request.board(), &problem.flop[..]);
    assert_eq!(request.opponents(), 3);

    assert_eq!(problem.request(0).unwrap_err(), EquityError::InvalidOpponentCount);
}
