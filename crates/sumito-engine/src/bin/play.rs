use std::io::{self, BufRead, Write};

use sumito_core::{
    has_legal_move, parse_legal_move, Board, Color, Game, GameResult, SearchLimits, Square,
    BOARD_SIZE,
};
use sumito_engine::{init_logging, AiKind, AI_COLOR};

const WHITE_PIECE: &str = "\x1b[1;97mW\x1b[0m";
const BLACK_PIECE: &str = "\x1b[1;31mB\x1b[0m";
const EMPTY_CELL: &str = "\x1b[2m.\x1b[0m";

fn render(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{col} "));
    }
    out.push('\n');
    for row in 0..BOARD_SIZE as u8 {
        out.push_str(&format!("{row}  "));
        for col in 0..BOARD_SIZE as u8 {
            let cell = match board.get(Square::new_unchecked(row, col)) {
                Some(Color::White) => WHITE_PIECE,
                Some(Color::Black) => BLACK_PIECE,
                None => EMPTY_CELL,
            };
            out.push_str(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() -> io::Result<()> {
    init_logging("warn");

    let args: Vec<String> = std::env::args().collect();
    let kind = match args.get(1) {
        None => AiKind::Greedy,
        Some(text) => match AiKind::parse(text) {
            Some(kind) => kind,
            None => {
                eprintln!("Unknown AI '{text}', expected greedy or alphabeta[:depth]");
                std::process::exit(2);
            }
        },
    };
    let mut ai = kind.searcher();
    let mut game = Game::new();
    let mut consecutive_passes = 0u8;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        println!("\n{}", render(game.board()));
        println!(
            "White: {}  Black: {}",
            game.remaining(Color::White),
            game.remaining(Color::Black)
        );

        if let GameResult::Won(winner) = game.result() {
            println!("{winner} wins!");
            break;
        }
        if consecutive_passes >= 2 {
            println!("Neither side can move. Game drawn.");
            break;
        }

        if !has_legal_move(game.board(), game.turn()) {
            println!("{} has no legal moves and passes.", game.turn());
            game.pass();
            consecutive_passes += 1;
            continue;
        }
        consecutive_passes = 0;

        if game.turn() == AI_COLOR {
            let result = ai.search(game.position(), SearchLimits::default());
            let Some(mv) = result.best_move else {
                println!("{} passes.", game.turn());
                game.pass();
                continue;
            };
            println!("{} plays {mv}", game.turn());
            if let Err(err) = game.make_move(&mv) {
                println!("AI move rejected: {err}");
                break;
            }
            continue;
        }

        print!("{} to move (row col DIRECTION, q to quit): ", game.turn());
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        match parse_legal_move(line, game.position()) {
            Ok(mv) => {
                if let Err(err) = game.make_move(&mv) {
                    println!("{err}");
                }
            }
            Err(err) => println!("{err}, try again."),
        }
    }

    Ok(())
}
