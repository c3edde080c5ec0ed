use anyhow::ensure;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, GameConfig, Match, RandomPlayer, Side};

const FLEET: [(usize, char, &str); 5] = [
    (5, 'A', "Carrier"),
    (4, 'B', "Battleship"),
    (3, 'C', "Cruiser"),
    (3, 'S', "Submarine"),
    (2, 'D', "Destroyer"),
];

/// Run a random-strategy Battleship match and print both boards.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid rows (1-10).
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Grid columns (1-10).
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Fix the RNG seed for a reproducible match.
    #[arg(long)]
    seed: Option<u64>,

    /// Obstruct random cells during ship placement, then unblock for play.
    #[arg(long)]
    obstacles: bool,

    /// Reveal ship positions in the final board printout.
    #[arg(long)]
    show_ships: bool,

    /// Log every shot as it is fired.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut config = GameConfig::new(cli.rows, cli.cols)?;
    for (length, symbol, name) in FLEET {
        // ships longer than both dimensions sit out on small grids
        if length <= cli.rows.max(cli.cols) {
            config.add_ship(length, symbol, name)?;
        }
    }
    ensure!(config.n_ships() > 0, "grid too small for any ship");

    let first = RandomPlayer::new(&config, &mut rng);
    let second = RandomPlayer::new(&config, &mut rng);
    let mut game = Match::new(
        &config,
        Box::new(first),
        Box::new(second),
        cli.obstacles,
        &mut rng,
    )?;
    let outcome = game.run(&mut rng)?;

    println!("{} wins after {} total shots\n", outcome.winner, outcome.shots);
    for side in [Side::First, Side::Second] {
        println!("{} board:", side);
        println!("{}", game.board(side).render(!cli.show_ships));
    }
    Ok(())
}
