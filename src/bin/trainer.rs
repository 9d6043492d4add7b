// src/bin/trainer.rs
//
// Тренажёр: случайная задача из набора, догадка игрока, правильный ответ.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use poker_equity::infra::{DeterministicRng, ProblemSet, SystemRng};
use poker_equity::engine::RandomSource;
use poker_equity::trainer::{DrawnQuestion, TrainerConfig, TrainerSession};

#[derive(Debug, Parser)]
#[command(name = "trainer", about = "Post-flop equity estimation trainer")]
struct Args {
    /// CSV с задачами (карты игрока + флоп).
    #[arg(long, default_value = "data/poker_equity_problems.csv")]
    problems: PathBuf,

    #[arg(long, default_value_t = TrainerConfig::default().questions)]
    questions: usize,

    #[arg(long, default_value_t = TrainerConfig::default().trials)]
    trials: u32,

    /// Seed для выбора задач и симуляций.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = TrainerConfig {
        questions: args.questions,
        trials: args.trials,
        ..TrainerConfig::default()
    };
    config.validate()?;

    let problems = ProblemSet::load(&args.problems)?;
    println!("Poker post-flop trainer: {} problems loaded", problems.len());

    match args.seed {
        Some(seed) => run(&problems, &config, &mut DeterministicRng::from_seed(seed), Some(seed)),
        None => run(&problems, &config, &mut SystemRng, None),
    }
}

fn run<R: RandomSource>(
    problems: &ProblemSet,
    config: &TrainerConfig,
    rng: &mut R,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut session = TrainerSession::new(config.tolerance);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for n in 0..config.questions {
        let question = DrawnQuestion::draw(problems, config, rng)?;
        let p = &question.problem;

        println!();
        println!("---- q{} | problem #{} ----", n + 1, p.id);
        println!("Num of opponents: {}", question.opponents);
        println!("Flop:    {} {} {}", p.flop[0], p.flop[1], p.flop[2]);
        println!("My hand: {} {}", p.player[0], p.player[1]);

        let actual = question.solve(config, seed.map(|s| s.wrapping_add(n as u64)))?.equity;

        let guess = loop {
            print!("Equity (0-100, step {}): ", config.guess_step);
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return finish(&session);
            };
            let guess = match line?.trim().parse::<u32>() {
                Ok(g) => config.check_guess(g),
                Err(_) => {
                    println!("  expected a number");
                    continue;
                }
            };
            match guess {
                Ok(g) => break g,
                Err(e) => println!("  {e}"),
            }
        };

        let outcome = session.record_guess(guess, actual);
        let mark = if outcome.close_enough { "OK " } else { "MISS" };
        println!("[{mark}] You selected {}% | Actual equity: {}%", outcome.guess, outcome.actual);
    }

    finish(&session)
}

fn finish(session: &TrainerSession) -> anyhow::Result<()> {
    println!();
    match session.average_error() {
        Some(avg) => {
            println!("% errors: {:?}", session.errors());
            println!("% avg error: {avg:.2}");
        }
        None => println!("No numbers entered yet."),
    }
    Ok(())
}
