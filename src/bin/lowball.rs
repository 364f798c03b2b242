//! Play a game of lowball dice in the terminal.
//!
//! Usage: cargo run --bin lowball -- [--bots-only] [--seed N] [--save game.bin]

use std::path::PathBuf;

use clap::Parser;

use lowball_dice::agents::plays_as;
use lowball_dice::display;
use lowball_dice::{AgentRegistry, GameConfig, GameRng, GameRunner, PlayError, Session, HUMAN_CONSOLE};

/// Lowest score wins: roll, keep at least one die, re-roll the rest
#[derive(Parser, Debug)]
#[command(name = "lowball")]
#[command(about = "Play a lowest-score-wins dice game", long_about = None)]
struct Args {
    /// Number of rounds to play
    #[arg(long, default_value_t = 4)]
    rounds: u32,

    /// Dice each player rolls per round
    #[arg(long, default_value_t = 5)]
    dice: u32,

    /// Random seed (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Replace the console player with a bot
    #[arg(long)]
    bots_only: bool,

    /// Save the session here after every round
    #[arg(long)]
    save: Option<PathBuf>,

    /// Resume a saved session instead of starting a new game
    #[arg(long)]
    resume: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut game, rng) = match &args.resume {
        Some(path) => {
            println!("Resuming game from {}", path.display());
            let session = Session::load(path)?;
            let rng = session.rng();
            (session.game, rng)
        }
        None => {
            println!("Setting up a new dice game ...");
            let mut config = GameConfig::default()
                .with_total_rounds(args.rounds)
                .with_dice_per_round(args.dice);
            if args.bots_only {
                config = config.bots_only();
            }
            let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
            (config.build(1), rng)
        }
    };

    let human = game
        .players
        .iter()
        .find(|p| plays_as(p, HUMAN_CONSOLE))
        .map(|p| p.id);

    print!("{}", display::dice_values_description(&game));
    let mut runner = GameRunner::new(AgentRegistry::with_defaults(), rng);

    println!("Entering main game loop ...");
    while !game.is_game_over()? {
        let number = runner.play_round(&mut game)?;
        println!("Round {number} complete!");
        print!("{}", display::score_table(&game, human)?);
        save(&args, &game, &runner)?;
    }

    println!();
    println!("Here are the final scores for the game ...");
    print!("{}", display::score_table(&game, human)?);
    println!();
    print!("{}", display::results_summary(&game));
    save(&args, &game, &runner)?;
    Ok(())
}

fn save(args: &Args, game: &lowball_dice::Game, runner: &GameRunner<GameRng>) -> Result<(), PlayError> {
    if let Some(path) = &args.save {
        Session::capture(game, runner.dice()).save(path)?;
    }
    Ok(())
}
