// src/bin/equity.rs
//
// Посчитать эквити руки из командной строки:
//   equity --hole As Ad --board Kd Qd Jd --opponents 1 --trials 10000

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use poker_equity::engine::{simulate, EquityRequest, SimulationConfig};
use poker_equity::eval::{describe_hand, evaluate_best_hand};

#[derive(Debug, Parser)]
#[command(name = "equity", about = "Monte Carlo equity of a Hold'em hand against random opponents")]
struct Args {
    /// Две карты игрока, например `As Kd`.
    #[arg(long, num_args = 2, required = true)]
    hole: Vec<String>,

    /// Известные карты борда (0–5).
    #[arg(long, num_args = 0..=5)]
    board: Vec<String>,

    #[arg(long, default_value_t = 1)]
    opponents: u32,

    /// Переопределяет `trials` из конфига.
    #[arg(long)]
    trials: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// JSON с `SimulationConfig`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Считать в одном потоке.
    #[arg(long)]
    sequential: bool,

    /// Вывести результат в JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.sequential {
        config.parallel = false;
    }

    let request = EquityRequest::from_strs(&args.hole, &args.board, args.opponents)?;
    let result = simulate(&request, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let cards = |cs: &[poker_equity::Card]| cs.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
    println!("hand:      {}", cards(&request.hole()));
    println!("board:     {}", if request.board().is_empty() { "-".to_string() } else { cards(request.board()) });
    if request.board().len() >= 3 {
        let made = evaluate_best_hand(&request.hole(), request.board())?;
        println!("made hand: {}", describe_hand(made));
    }
    println!("opponents: {}", request.opponents());
    println!(
        "equity:    {}%  ({} trials: {} won, {} tied, {} lost)",
        result.equity, result.trials, result.wins, result.ties, result.losses
    );
    Ok(())
}
