//! Terminal front-end: play four in a row against the computer or a friend.
//!
//! Settings are read from `four-in-a-row.toml` (see `--config`); logging is
//! controlled with `RUST_LOG`.

#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from,
    clippy::multiple_crate_versions
)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use four_in_a_row::config::AiSeat;
use four_in_a_row::{AiPlayer, AppConfig, Board, Game};

/// Play four in a row in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "four-in-a-row",
    about = "Play four in a row against the computer"
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four-in-a-row.toml")]
    config: PathBuf,

    /// Override how many plies the computer looks ahead
    #[arg(long)]
    depth: Option<usize>,

    /// Seed the computer's choice among equally good moves
    #[arg(long)]
    seed: Option<u64>,

    /// Two humans share the terminal, no computer player
    #[arg(long)]
    hot_seat: bool,
}

/// Reads one trimmed line; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    io::stdout().flush().context("flushing stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading stdin")?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

/// Asks for a column until a playable one is given. `None` means quit.
fn read_column(input: &mut impl BufRead, board: &Board) -> Result<Option<usize>> {
    loop {
        print!("Choose your move (column): ");
        for col in board.available_columns_iter().map(|x| x + 1) {
            print!("{col},");
        }
        print!(" or q to quit: ");

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        // adapt to index
        match line.parse::<usize>() {
            Ok(col) if col >= 1 && board.can_place(col - 1) => return Ok(Some(col - 1)),
            _ => println!("'{line}' is not a playable column."),
        }
    }
}

fn ask_play_again(input: &mut impl BufRead) -> Result<bool> {
    print!("Play again? [y/N] ");
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.ai.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }
    if cli.hot_seat {
        config.game.ai_player = AiSeat::None;
    }
    config.validate().context("invalid configuration")?;

    let mut game = Game::<7, 6>::new(config.roster(), config.game.first_player);
    let mut ai = AiPlayer::new(&config.ai);
    let ai_seat = config.game.ai_player.player();
    let min_think = Duration::from_millis(config.ai.min_think_ms);
    let mut input = io::stdin().lock();

    println!("Let's play four in a row.");
    loop {
        println!("----------------");
        print!("{}", game.board().colored(game.roster()));
        println!("{}", game.status_line());

        if game.is_over() {
            if !ask_play_again(&mut input)? {
                break;
            }
            game.reset();
            continue;
        }

        // Computer player
        let column = if ai_seat == Some(game.current_player()) {
            let started = Instant::now();
            let column = ai
                .choose_column(&game)
                .context("computer found no move in a running game")?;
            if let Some(rest) = min_think.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
            println!("{} chose column {}", game.current_info().name(), column + 1);
            column
        }
        // Human player
        else {
            match read_column(&mut input, game.board())? {
                Some(column) => column,
                None => break,
            }
        };

        if let Err(err) = game.play(column) {
            println!("{err}, try again.");
        }
    }

    Ok(())
}
