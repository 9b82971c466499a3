use std::sync::{Arc, Mutex};
use std::thread;

use sumito_engine::{init_logging, play_game, AiKind, GameRecord, Outcome, SelfPlayConfig};
use tracing::{info, warn};

fn parse_kind(text: Option<&String>, fallback: AiKind) -> AiKind {
    match text {
        None => fallback,
        Some(text) => AiKind::parse(text).unwrap_or_else(|| {
            warn!(%text, "unknown AI kind, using default");
            fallback
        }),
    }
}

/// Usage: `arena [games] [white] [black] [max_moves] [random_opening] [threads]`
/// where each AI is `greedy` or `alphabeta[:depth]`.
fn main() {
    init_logging("info");

    let args: Vec<String> = std::env::args().collect();
    let defaults = SelfPlayConfig::default();
    let num_games: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10);
    let white = parse_kind(args.get(2), defaults.white);
    let black = parse_kind(args.get(3), defaults.black);
    let max_moves: u32 = args
        .get(4)
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.max_moves);
    let random_opening: u32 = args.get(5).and_then(|s| s.parse().ok()).unwrap_or(4);
    let num_threads: usize = args.get(6).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    });

    info!(
        num_games,
        ?white,
        ?black,
        max_moves,
        random_opening,
        num_threads,
        "starting arena"
    );

    let next_game = Arc::new(Mutex::new(0u32));
    let records: Arc<Mutex<Vec<(u32, GameRecord)>>> =
        Arc::new(Mutex::new(Vec::with_capacity(num_games as usize)));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let next_game = Arc::clone(&next_game);
            let records = Arc::clone(&records);

            thread::spawn(move || loop {
                let game_num = {
                    let Ok(mut next) = next_game.lock() else {
                        break;
                    };
                    if *next >= num_games {
                        break;
                    }
                    *next += 1;
                    *next
                };

                let record = play_game(&SelfPlayConfig {
                    white,
                    black,
                    max_moves,
                    random_opening,
                    seed: u64::from(game_num),
                });
                info!(
                    thread_id,
                    game_num,
                    result = ?record.result,
                    moves = record.total_moves,
                    "game complete"
                );
                if let Ok(mut records) = records.lock() {
                    records.push((game_num, record));
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            warn!("arena worker panicked");
        }
    }

    let mut all = match records.lock() {
        Ok(mut records) => std::mem::take(&mut *records),
        Err(_) => Vec::new(),
    };
    all.sort_by_key(|(game_num, _)| *game_num);

    let (mut white_wins, mut black_wins, mut unfinished) = (0u32, 0u32, 0u32);
    for (_, record) in &all {
        match record.result {
            Outcome::WhiteWin => white_wins += 1,
            Outcome::BlackWin => black_wins += 1,
            Outcome::Stalemate | Outcome::MoveLimit => unfinished += 1,
        }
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(err) => warn!(%err, "failed to serialize game record"),
        }
    }

    info!(white_wins, black_wins, unfinished, "arena finished");
}
