#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{cli::print_grid, init_logging, run_session, GameConfig, GameEngine};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = battleships::BOARD_ROWS, help = "Board rows, lettered A-Z")]
    rows: usize,
    #[arg(long, default_value_t = battleships::BOARD_COLS, help = "Board columns, numbered from 1")]
    cols: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Hunt the hidden fleet on the console.
    Play(BoardArgs),
    /// Place one fleet and print every ship position.
    Reveal(BoardArgs),
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let mut rng = seeded_rng(args.seed);
            let config = GameConfig::with_dimensions(args.rows, args.cols);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let summary = run_session(stdin.lock(), &mut stdout, &mut rng, config)?;
            println!(
                "Rounds won: {}/{}, total shots: {}",
                summary.rounds_won, summary.rounds_played, summary.shots
            );
        }
        Commands::Reveal(args) => {
            let mut rng = seeded_rng(args.seed);
            let config = GameConfig::with_dimensions(args.rows, args.cols);
            let alphabet = config.alphabet;
            let mut engine = GameEngine::new(config)?;
            engine.new_round(&mut rng)?;
            print_grid(
                &mut std::io::stdout(),
                &engine.grid().render_omniscient_view(),
                alphabet,
            )?;
            for (code, ship) in engine.grid().ships() {
                println!("{}: {} ({})", code, ship.name(), ship.size());
            }
        }
    }
    Ok(())
}
