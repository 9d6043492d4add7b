//! Монте-Карло симулятор эквити.
//!
//! Одна симуляция:
//!   1. из колоды без известных карт выбираем без возвращения
//!      недостающие карты борда и по две карты каждому сопернику;
//!   2. оцениваем руку игрока и руки соперников;
//!   3. сравниваем с лучшей рукой соперников: победа — 1, ничья — 0.5.

use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::deck::Deck;
use crate::domain::hand::HandRank;
use crate::eval::best_of_all_5card_combinations;
use crate::infra::RngSeed;

use super::config::SimulationConfig;
use super::errors::EquityError;
use super::request::{EquityRequest, BOARD_SIZE};
use super::tally::{SimulationResult, Tally};
use super::RandomSource;

/// Прогнать симуляцию по конфигу.
///
/// Симуляции режутся на батчи по `batch_size`, у каждого батча свой RNG
/// из `RngSeed::derive(batch_index)` и своя колода. Частичные суммы
/// сливаются в конце, поэтому при фиксированном seed результат
/// одинаков и в параллельном, и в последовательном режиме.
pub fn simulate(request: &EquityRequest, config: &SimulationConfig) -> Result<SimulationResult, EquityError> {
    config.validate()?;

    let seed = config.seed.map(RngSeed::from_u64).unwrap_or_else(RngSeed::random);
    let trials = config.trials as u64;
    let batch_size = config.batch_size as u64;
    let batches = trials.div_ceil(batch_size) as usize;

    debug!(
        "simulate: hole={}{} board={} opponents={} trials={} batches={} parallel={}",
        request.hole()[0],
        request.hole()[1],
        format_cards(request.board()),
        request.opponents(),
        trials,
        batches,
        config.parallel,
    );
    let started = Instant::now();

    let run_batch = |batch_index: usize| -> Tally {
        let done = batch_index as u64 * batch_size;
        let n = batch_size.min(trials - done);
        let mut rng = seed.derive(batch_index as u64).to_rng();
        let tally = run_trials(request, n, &mut rng);
        trace!("batch {batch_index}: {n} trials, {tally:?}");
        tally
    };

    let tally = if config.parallel {
        (0..batches)
            .into_par_iter()
            .map(run_batch)
            .reduce(Tally::default, Tally::merge)
    } else {
        (0..batches).map(run_batch).fold(Tally::default(), Tally::merge)
    };

    let result = SimulationResult::from_tally(&tally);
    debug!(
        "simulate: equity={}% (wins={} ties={} losses={}) in {:?}",
        result.equity,
        result.wins,
        result.ties,
        result.losses,
        started.elapsed(),
    );
    Ok(result)
}

/// Однопоточный прогон с RNG вызывающего.
pub fn simulate_with_rng<R: RandomSource>(
    request: &EquityRequest,
    trials: u32,
    rng: &mut R,
) -> Result<SimulationResult, EquityError> {
    if trials == 0 {
        return Err(EquityError::InvalidTrialCount);
    }
    let tally = run_trials(request, trials as u64, rng);
    Ok(SimulationResult::from_tally(&tally))
}

/// Эквити игрока в процентах (0..=100) против `opponent_count` случайных рук.
pub fn compute_equity(
    hole: [Card; 2],
    board: &[Card],
    trial_count: u32,
    opponent_count: u32,
) -> Result<u8, EquityError> {
    let request = EquityRequest::new(hole, board, opponent_count)?;
    let config = SimulationConfig::with_trials(trial_count);
    Ok(simulate(&request, &config)?.equity)
}

/// То же, что `compute_equity`, но воспроизводимо при одинаковом `seed`.
pub fn compute_equity_seeded(
    hole: [Card; 2],
    board: &[Card],
    trial_count: u32,
    opponent_count: u32,
    seed: u64,
) -> Result<u8, EquityError> {
    let request = EquityRequest::new(hole, board, opponent_count)?;
    let config = SimulationConfig::with_trials(trial_count).seeded(seed);
    Ok(simulate(&request, &config)?.equity)
}

/// Горячий цикл: `trials` независимых раздач.
///
/// Колода строится один раз; каждая раздача — частичное перемешивание
/// Фишера–Йетса этого буфера, т.е. равномерная выборка без возвращения
/// из оставшихся 52 − |known| карт. Аллокаций внутри цикла нет.
fn run_trials<R: RandomSource>(request: &EquityRequest, trials: u64, rng: &mut R) -> Tally {
    let mut deck = Deck::without(&request.known()).cards;
    let to_deal = request.cards_to_deal();
    let missing = request.board_cards_missing();
    let known_board = request.board();
    let [h0, h1] = request.hole();

    let filler = Card::new(Rank::Two, Suit::Clubs);
    let mut board = [filler; BOARD_SIZE];
    board[..known_board.len()].copy_from_slice(known_board);

    let mut tally = Tally::default();

    for _ in 0..trials {
        let dealt = rng.partial_shuffle(&mut deck, to_deal);
        // EquityRequest гарантирует размер колоды; сюда попадаем только при ошибке в логике.
        assert!(
            dealt.len() == to_deal,
            "колода исчерпана: нужно {to_deal} карт, выдано {}",
            dealt.len()
        );

        let (runout, opponent_cards) = dealt.split_at(missing);
        board[known_board.len()..].copy_from_slice(runout);

        let player = rank_seven(h0, h1, &board);
        let best_opponent = opponent_cards
            .chunks_exact(2)
            .map(|opp| rank_seven(opp[0], opp[1], &board))
            .max()
            .unwrap_or(HandRank::WORST);

        tally.record(player.cmp(&best_opponent));
    }

    tally
}

#[inline]
fn rank_seven(c0: Card, c1: Card, board: &[Card; BOARD_SIZE]) -> HandRank {
    let seven = [c0, c1, board[0], board[1], board[2], board[3], board[4]];
    best_of_all_5card_combinations(&seven)
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join("")
}
