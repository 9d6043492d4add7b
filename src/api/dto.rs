use serde::{Deserialize, Serialize};

use crate::engine::{SimulationConfig, SimulationResult};

fn default_opponents() -> u32 {
    1
}

fn default_trials() -> u32 {
    SimulationConfig::default().trials
}

/// Запрос эквити в строковом формате карт (`"As"`, `"Td"`, `"2h"`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquityQueryDto {
    /// Ровно две карты игрока.
    pub hole: Vec<String>,
    /// Известная часть борда, 0..=5 карт.
    #[serde(default)]
    pub board: Vec<String>,
    #[serde(default = "default_opponents")]
    pub opponents: u32,
    #[serde(default = "default_trials")]
    pub trials: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Ответ: эквити и счётчики, из которых оно посчитано.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityResponseDto {
    pub hole: Vec<String>,
    pub board: Vec<String>,
    pub opponents: u32,
    /// Эквити в процентах (0..=100).
    pub equity: u8,
    pub trials: u64,
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl EquityResponseDto {
    pub fn new(query: &EquityQueryDto, result: &SimulationResult) -> Self {
        Self {
            hole: query.hole.clone(),
            board: query.board.clone(),
            opponents: query.opponents,
            equity: result.equity,
            trials: result.trials,
            wins: result.wins,
            ties: result.ties,
            losses: result.losses,
        }
    }
}
