use std::ops::AddAssign;

use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{
    Board, BotInput, BotType, GameStatus, Mark, MoveError, Side, Sides, calculate_move,
    evaluate_status,
};

#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    pub cross: BotType,
    pub circle: BotType,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub cross_wins: u32,
    pub circle_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn games(&self) -> u32 {
        self.cross_wins + self.circle_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Side::Human) => self.cross_wins += 1,
            GameStatus::Won(Side::Bot) => self.circle_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.cross_wins += other.cross_wins;
        self.circle_wins += other.circle_wins;
        self.draws += other.draws;
    }
}

/// Plays one bot-vs-bot game to the end and returns the final status.
/// Cross takes the human side of the default designation, circle the bot side.
pub fn play_game(
    settings: MatchSettings,
    first: Mark,
    rng: &mut SessionRng,
) -> Result<GameStatus, MoveError> {
    let sides = Sides::default();
    let mut board = Board::new();
    let mut side = sides.side_of(first).ok_or(MoveError::InvalidSides {
        human: sides.human(),
        bot: sides.bot(),
    })?;

    loop {
        let status = evaluate_status(&board, &sides);
        if status.is_over() {
            return Ok(status);
        }

        let bot_type = match side {
            Side::Human => settings.cross,
            Side::Bot => settings.circle,
        };
        let input = BotInput {
            board,
            sides,
            side_to_move: side,
        };
        let position = calculate_move(bot_type, input, rng)?;
        board.set(position, sides.mark_of(side));
        side = side.other();
    }
}

/// Plays `games` games, alternating the opening mark, starting with cross on even indices.
pub fn play_games(
    settings: MatchSettings,
    first_index: u32,
    games: u32,
    rng: &mut SessionRng,
) -> Result<Tally, MoveError> {
    let mut tally = Tally::default();
    for index in first_index..first_index + games {
        let first = if index % 2 == 0 { Mark::Cross } else { Mark::Circle };
        tally.record(play_game(settings, first, rng)?);
    }
    Ok(tally)
}

/// Spreads the games over blocking workers, each with its own random stream.
pub async fn run_tournament(
    settings: MatchSettings,
    games: u32,
    workers: usize,
    rng: &SessionRng,
) -> Result<Tally, Box<dyn std::error::Error + Send + Sync>> {
    let workers = workers.clamp(1, games.max(1) as usize) as u32;
    let per_worker = games / workers;
    let remainder = games % workers;

    let mut handles = Vec::with_capacity(workers as usize);
    let mut first_index = 0;
    for worker in 0..workers {
        let count = per_worker + u32::from(worker < remainder);
        let mut worker_rng = rng.for_stream(worker as u64);
        let start = first_index;
        handles.push(tokio::task::spawn_blocking(move || {
            play_games(settings, start, count, &mut worker_rng)
        }));
        first_index += count;
    }

    let mut tally = Tally::default();
    for handle in handles {
        tally += handle.await??;
    }
    Ok(tally)
}
