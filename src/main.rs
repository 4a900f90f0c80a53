use broadside::{init_logging, Game, GameConfig, PlayerId};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Automated battleship match simulator", long_about = None)]
struct Cli {
    /// Number of matches to play.
    #[arg(long, default_value_t = 1)]
    games: usize,

    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,

    /// Side length of both boards.
    #[arg(long, default_value_t = 10)]
    board_size: usize,

    /// Print both boards after each game.
    #[arg(long)]
    show_boards: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (games will be reproducible)", s);
    }
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let config = GameConfig {
        board_size: cli.board_size,
        ..GameConfig::default()
    };
    let mut game = Game::with_config("Player 1", "Player 2", &config)?;
    let mut wins = [0usize; 2];
    let mut total_moves = 0usize;

    for n in 0..cli.games {
        game.place_all_ships_random(PlayerId::One, &mut rng)?;
        game.place_all_ships_random(PlayerId::Two, &mut rng)?;
        game.start()?;

        let mut moves = 0usize;
        while game.in_progress() {
            let active = game.active_player();
            let (row, col) = game
                .player(active)
                .next_guess(&mut rng)
                .ok_or_else(|| anyhow::anyhow!("no targets remain"))?;
            game.attack(row, col)?;
            moves += 1;
        }

        let winner = game.winner().expect("finished game has a winner");
        println!(
            "game {}: {} wins after {} moves",
            n + 1,
            game.player(winner).name(),
            moves
        );
        if cli.show_boards {
            for id in [PlayerId::One, PlayerId::Two] {
                println!("{}:\n{}", game.player(id).name(), game.player(id).board());
            }
        }

        wins[match winner {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }] += 1;
        total_moves += moves;
        game.reset();
    }

    println!(
        "\n{} games: Player 1 won {}, Player 2 won {}, {:.1} moves on average",
        cli.games,
        wins[0],
        wins[1],
        total_moves as f64 / cli.games.max(1) as f64
    );
    Ok(())
}
