//! Набор задач для тренажёра: рука игрока + флоп.
//!
//! Формат хранения — CSV с заголовком, первые пять колонок:
//!   player_card_1, player_card_2, flop_1, flop_2, flop_3
//! В ячейках лежат имена картинок карт (`As.png`, `Td.png`), имя без
//! расширения — это сама карта. Лишние колонки игнорируются.
//!
//! Первая строка всегда считается заголовком. Если она сама разбирается
//! как задача, заголовка в файле нет — это ошибка, а не молчаливая потеря
//! первой задачи. Ячейки в кавычках могут содержать запятые.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::card_set::CardSet;
use crate::engine::{EquityError, EquityRequest, RandomSource};

/// Ошибки загрузки набора задач.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("Не удалось прочитать {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Строка {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Набор задач пуст")]
    Empty,

    #[error("Первая строка похожа на задачу, а не на заголовок: {0:?}")]
    MissingHeader(String),
}

/// Одна задача: две карты игрока и три карты флопа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Problem {
    /// Номер задачи = номер строки данных (с нуля, без заголовка).
    pub id: usize,
    pub player: [Card; 2],
    pub flop: [Card; 3],
}

impl Problem {
    /// Запрос к симулятору для этой задачи против `opponents` соперников.
    pub fn request(&self, opponents: u32) -> Result<EquityRequest, EquityError> {
        EquityRequest::new(self.player, &self.flop, opponents)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_csv_str(&text)?;
        info!("loaded {} problems from {}", set.len(), path.display());
        Ok(set)
    }

    /// Разобрать CSV. Первая строка — заголовок, пустые строки пропускаются.
    pub fn from_csv_str(text: &str) -> Result<Self, ProblemError> {
        let mut lines = text.lines();
        if let Some(header) = lines.next() {
            if parse_row(0, 1, header).is_ok() {
                return Err(ProblemError::MissingHeader(header.to_string()));
            }
        }

        let mut problems = Vec::new();
        for (line_idx, line) in lines.enumerate() {
            let line_no = line_idx + 2;
            if line.trim().is_empty() {
                warn!("problem set: skipping blank line {line_no}");
                continue;
            }
            let problem = parse_row(problems.len(), line_no, line)?;
            problems.push(problem);
        }

        if problems.is_empty() {
            return Err(ProblemError::Empty);
        }
        Ok(Self { problems })
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Problem> {
        self.problems.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }

    /// Случайная задача (равномерно).
    pub fn pick_random<R: RandomSource>(&self, rng: &mut R) -> Option<&Problem> {
        if self.problems.is_empty() {
            return None;
        }
        self.problems.get(rng.gen_index(self.problems.len()))
    }
}

fn parse_row(id: usize, line_no: usize, line: &str) -> Result<Problem, ProblemError> {
    let parse_err = |reason: String| ProblemError::Parse { line: line_no, reason };

    let cells = split_row(line);
    if cells.len() < 5 {
        return Err(parse_err(format!("ожидается 5 колонок, найдено {}", cells.len())));
    }

    let mut cards = [Card::new(Rank::Two, Suit::Clubs); 5];
    for (slot, cell) in cards.iter_mut().zip(cells.iter()) {
        *slot = Card::from_asset_name(cell.trim()).map_err(|e| parse_err(e.to_string()))?;
    }
    CardSet::from_cards(&cards).map_err(|dup| parse_err(format!("карта {dup} повторяется")))?;

    Ok(Problem {
        id,
        player: [cards[0], cards[1]],
        flop: [cards[2], cards[3], cards[4]],
    })
}

/// Разбить строку CSV на ячейки. Запятая внутри кавычек — часть ячейки,
/// `""` внутри кавычек — одна кавычка.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(ch),
        }
    }
    cells.push(cell);
    cells
}
