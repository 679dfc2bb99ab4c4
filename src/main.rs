use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use core48::{Board, Direction, DEFAULT_SIZE};

/// Headless self-play driver for the core48 engine.
#[derive(Parser, Debug)]
struct Args {
    /// Board size in cells per side.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Seed for the tile and direction RNGs; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum number of accepted shifts before stopping.
    #[arg(long, default_value_t = 10_000)]
    shifts: usize,
    /// Print the board after every accepted shift.
    #[arg(long)]
    show_boards: bool,
    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(args.verbosity.log_level_filter())
        .chain(std::io::stderr())
        .apply()?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("playing a {0}x{0} board with seed {1}", args.size, seed);

    let mut directions = StdRng::seed_from_u64(seed);
    let mut board = Board::new(args.size, StdRng::seed_from_u64(seed.wrapping_add(1)))?;

    let mut accepted = 0;
    while !board.is_game_over() && accepted < args.shifts {
        let direction = *[
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ]
        .choose(&mut directions)
        .expect("there is always a direction to choose");
        if board.shift(direction).changed() {
            accepted += 1;
            if args.show_boards {
                println!("{}", board.grid());
            }
        }
    }

    println!("{}", board.grid());
    println!(
        "seed: {}, shifts: {}, score: {}, highest tile: {}, game over: {}",
        seed,
        accepted,
        board.score(),
        board.grid().highest_tile(),
        board.is_game_over(),
    );

    Ok(())
}
