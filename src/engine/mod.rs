//! Движок эквити: постановка задачи, конфиг, Монте-Карло симуляция.
//!
//! Основные операции:
//!   - `compute_equity` – эквити в процентах для руки, борда и числа соперников
//!   - `simulate` – полный прогон по `SimulationConfig` с подробным итогом
//!   - `simulate_with_rng` – однопоточный прогон с RNG вызывающего

pub mod config;
pub mod errors;
pub mod request;
pub mod simulator;
pub mod tally;

pub use config::SimulationConfig;
pub use errors::EquityError;
pub use request::EquityRequest;
pub use simulator::{compute_equity, compute_equity_seeded, simulate, simulate_with_rng};
pub use tally::{rounded_percent, SimulationResult, Tally};

/// RNG интерфейс для движка.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Частичное перемешивание: возвращает `amount` случайно выбранных
    /// элементов (равномерно, без возвращения). Если `amount` больше длины,
    /// возвращается весь срез.
    fn partial_shuffle<'a, T>(&mut self, slice: &'a mut [T], amount: usize) -> &'a mut [T];

    /// Случайный индекс в `0..upper`. `upper` должен быть больше нуля.
    fn gen_index(&mut self, upper: usize) -> usize;
}
