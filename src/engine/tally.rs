use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Счётчики исходов симуляций одного вызова (или одного батча).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tally {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl Tally {
    /// Записать исход: рука игрока против лучшей руки соперников.
    pub fn record(&mut self, player_vs_best: Ordering) {
        match player_vs_best {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }

    /// Слить частичные суммы двух батчей.
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }

    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Очки в половинках: победа = 2, ничья = 1.
    pub fn half_points(&self) -> u64 {
        2 * self.wins + self.ties
    }
}

/// Итог одного вызова симулятора.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    /// Эквити в процентах, округлённое до целого (0..=100).
    pub equity: u8,
    pub trials: u64,
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    /// Победы плюс половина ничьих.
    pub win_points: f64,
}

impl SimulationResult {
    pub fn from_tally(tally: &Tally) -> Self {
        let trials = tally.trials();
        Self {
            equity: rounded_percent(tally.half_points(), 2 * trials),
            trials,
            wins: tally.wins,
            ties: tally.ties,
            losses: tally.losses,
            win_points: tally.half_points() as f64 / 2.0,
        }
    }

    /// Неокруглённая доля 0.0..=1.0.
    pub fn equity_fraction(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.win_points / self.trials as f64
    }
}

/// `round(100 * numerator / denominator)` с округлением половины к чётному,
/// в целых числах. При `denominator == 0` — 0.
pub fn rounded_percent(numerator: u64, denominator: u64) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let scaled = 100 * numerator;
    let quotient = scaled / denominator;
    let twice_rem = 2 * (scaled % denominator);

    let rounded = match twice_rem.cmp(&denominator) {
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    };
    rounded.min(100) as u8
}
