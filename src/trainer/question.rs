use log::debug;

use crate::engine::{simulate, RandomSource, SimulationConfig, SimulationResult};
use crate::infra::{Problem, ProblemSet};

use super::config::TrainerConfig;
use super::errors::TrainerError;

/// Вопрос тренажёра: случайная задача и случайное число соперников.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnQuestion {
    pub problem: Problem,
    pub opponents: u32,
}

impl DrawnQuestion {
    pub fn draw<R: RandomSource>(
        problems: &ProblemSet,
        config: &TrainerConfig,
        rng: &mut R,
    ) -> Result<Self, TrainerError> {
        config.validate()?;
        let problem = problems.pick_random(rng).ok_or(TrainerError::NoProblems)?.clone();
        let span = (config.max_opponents - config.min_opponents + 1) as usize;
        let opponents = config.min_opponents + rng.gen_index(span) as u32;
        debug!("drew problem {} against {opponents} opponents", problem.id);
        Ok(Self { problem, opponents })
    }

    /// Посчитать правильный ответ.
    pub fn solve(&self, config: &TrainerConfig, seed: Option<u64>) -> Result<SimulationResult, TrainerError> {
        let request = self.problem.request(self.opponents)?;
        let sim = SimulationConfig {
            trials: config.trials,
            seed,
            ..SimulationConfig::default()
        };
        Ok(simulate(&request, &sim)?)
    }
}
