#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::io::{BufRead, Write, stdin, stdout};

use chess_rules::{Board, Color, Layout, MoveResult};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Play moves in long algebraic notation, one per line.
#[derive(Debug, Parser)]
#[command(name = "chess_rules", version)]
struct Args {
    /// 64 character layout, rank 8 first, `.` for vacant squares.
    #[arg(short, long)]
    layout: Option<String>,
    /// Side to play first.
    #[arg(short, long, default_value_t = Color::White)]
    to_play: Color,
}

fn print_board(board: &Board) {
    print!("{board}");
    println!("{} plays", board.to_play());
}
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut board = match args.layout {
        Some(layout) => Board::custom(&layout, args.to_play)?,
        None => Board::with_layout(&Layout::standard(), args.to_play),
    };
    print_board(&board);
    let mut lines = stdin().lock().lines();
    loop {
        print!("> ");
        stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "" => continue,
            "exit" | "quit" => break,
            notation => {
                let result = MoveResult::from(board.move_notation(notation));
                if result.succeeded() {
                    print_board(&board);
                }
                println!("{result}");
            }
        }
    }
    Ok(())
}
