//! One-shot stub engine for exercising the process backend.
//!
//! Speaks the same command-line contract as a real engine binary: given
//! `--time <secs>` and `--position <fen>` it prints one move and exits.
//! Extra flags steer it into the failure modes the adapter must handle:
//!
//!   --reply <token>     print <token> instead of searching
//!   --exit-code <n>     exit with status <n> before printing anything
//!   --sleep-ms <n>      stall for <n> milliseconds first
//!   --chatter           print extra lines after the move
//!   --silent            exit 0 without printing anything
//!
//! Without a canned reply it picks a random legal move from the FEN, which
//! is all the "search" infrastructure testing needs.

use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use cozy_chess::Board;
use rand::seq::SliceRandom;

struct Opts {
    time: f64,
    position: Option<String>,
    reply: Option<String>,
    exit_code: Option<i32>,
    sleep_ms: Option<u64>,
    chatter: bool,
    silent: bool,
}

fn parse_args() -> Result<Opts> {
    let mut opts = Opts {
        time: 3.0,
        position: None,
        reply: None,
        exit_code: None,
        sleep_ms: None,
        chatter: false,
        silent: false,
    };

    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--time" => {
                opts.time = args
                    .next()
                    .context("--time expects seconds")?
                    .parse()
                    .context("--time expects seconds")?;
            }
            "--position" => {
                opts.position = Some(args.next().context("--position expects a FEN")?);
            }
            "--reply" => {
                opts.reply = Some(args.next().context("--reply expects a token")?);
            }
            "--exit-code" => {
                opts.exit_code = Some(
                    args.next()
                        .context("--exit-code expects a status")?
                        .parse()
                        .context("--exit-code expects a status")?,
                );
            }
            "--sleep-ms" => {
                opts.sleep_ms = Some(
                    args.next()
                        .context("--sleep-ms expects milliseconds")?
                        .parse()
                        .context("--sleep-ms expects milliseconds")?,
                );
            }
            "--chatter" => opts.chatter = true,
            "--silent" => opts.silent = true,
            other => bail!("unknown flag {:?}", other),
        }
    }

    Ok(opts)
}

fn main() -> Result<()> {
    let opts = parse_args()?;

    if let Some(ms) = opts.sleep_ms {
        thread::sleep(Duration::from_millis(ms));
    }
    if let Some(code) = opts.exit_code {
        std::process::exit(code);
    }
    if opts.silent {
        return Ok(());
    }

    match &opts.reply {
        Some(token) => println!("{}", token),
        None => {
            let fen = opts.position.as_deref().context("--position is required")?;
            let board: Board = fen
                .parse()
                .map_err(|e| anyhow!("invalid FEN {:?}: {:?}", fen, e))?;

            let mut moves = Vec::new();
            board.generate_moves(|set| {
                moves.extend(set);
                false
            });
            let mv = moves
                .choose(&mut rand::thread_rng())
                .copied()
                .context("no legal moves in position")?;
            println!("{}", mv);
        }
    }

    if opts.chatter {
        println!("info budget {}s spent 0s", opts.time);
        println!("bye");
    }

    Ok(())
}
