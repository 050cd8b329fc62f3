use tracing::debug;

use super::board::{Board, DropError, COLS, ROWS};
use super::player::Player;
use super::win::WinningPlay;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

impl From<DropError> for MoveError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::ColumnFull => MoveError::ColumnFull,
            DropError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// A sitting of Connect Four: the current game's board, turn, and history,
/// plus win counters that accumulate across games.
///
/// [`reset`](GameSession::reset) starts a new game but keeps the win
/// counters; dropping the session is the only way to clear them. A finished
/// game rejects further moves until reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    move_count: usize,
    winner: Option<Player>,
    winning_play: Option<WinningPlay>,
    move_history: Vec<String>,
    draw: bool,
    red_wins: u32,
    yellow_wins: u32,
}

impl GameSession {
    /// Create a session with an empty board, Red to move, zero statistics
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            move_count: 0,
            winner: None,
            winning_play: None,
            move_history: Vec::new(),
            draw: false,
            red_wins: 0,
            yellow_wins: 0,
        }
    }

    /// Start a new game: clears the board, history, and outcome, and hands
    /// the first move back to Red. Win counters are deliberately kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Red;
        self.move_count = 0;
        self.winner = None;
        self.winning_play = None;
        self.move_history.clear();
        self.draw = false;
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player. After a terminal move this stays on the player
    /// who moved last.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get the winner of the current game, if any
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the four cells that won the current game, if any
    pub fn winning_play(&self) -> Option<&WinningPlay> {
        self.winning_play.as_ref()
    }

    /// Get the move history of the current game, oldest first
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    /// Whether the current game ended with a full board and no winner
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Number of pieces placed in the current game
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Total games won by a player across this session
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    /// Check if the current game is over (won or drawn)
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.draw
    }

    /// Get the outcome of the current game, derived from winner/draw state
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner {
            Some(GameOutcome::Winner(winner))
        } else if self.draw {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Check if a column cannot accept more pieces
    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    /// Play the current player's piece in a column.
    ///
    /// On success the piece lands in the lowest empty cell of the column and
    /// the turn passes to the other player, unless the move ended the game:
    /// a win records the winner and their line and bumps their win counter,
    /// a 42nd piece without a winner records a draw, and in both cases the
    /// turn stays put.
    ///
    /// # Errors
    ///
    /// Fails without side effects if the game is already over, the column is
    /// out of range, or the column is full.
    pub fn play(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;
        self.move_count += 1;
        self.move_history
            .push(format!("{} plays column {}", player.name(), column + 1));
        debug!(player = %player, column, row, "piece placed");

        if let Some(play) = self.board.winning_line(row, column) {
            self.winner = Some(player);
            self.winning_play = Some(play);
            match player {
                Player::Red => self.red_wins += 1,
                Player::Yellow => self.yellow_wins += 1,
            }
            debug!(player = %player, "four in a row, game over");
            return Ok(());
        }

        if self.move_count == ROWS * COLS {
            self.draw = true;
            debug!("board full with no winner, draw");
            return Ok(());
        }

        self.current_player = player.other();
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    /// Red stacks column 0 while Yellow answers in column 1; Red's fourth
    /// piece completes the vertical line.
    fn play_red_vertical_win(session: &mut GameSession) {
        for &col in &[0, 1, 0, 1, 0, 1, 0] {
            session.play(col).unwrap();
        }
    }

    /// A 42-move fill with no four-in-a-row anywhere. Columns 0..6 end up
    /// as (bottom to top) RRYYRR / YYRRYY pairs, with column 6 alternating.
    const DRAW_SEQUENCE: [usize; 42] = [
        0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, // columns 0 and 1
        2, 3, 2, 3, 3, 2, 3, 2, 2, 3, 2, 3, // columns 2 and 3
        4, 5, 4, 5, 5, 4, 5, 4, 4, 5, 4, 5, // columns 4 and 5
        6, 6, 6, 6, 6, 6, // column 6
    ];

    #[test]
    fn test_initial_state() {
        let session = GameSession::new();
        assert_eq!(session.current_player(), Player::Red);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.winner(), None);
        assert_eq!(session.winning_play(), None);
        assert!(session.move_history().is_empty());
        assert!(!session.is_draw());
        assert!(!session.is_game_over());
        assert_eq!(session.outcome(), None);
        assert_eq!(session.wins(Player::Red), 0);
        assert_eq!(session.wins(Player::Yellow), 0);
    }

    #[test]
    fn test_play_places_piece_and_alternates_turn() {
        let mut session = GameSession::new();
        session.play(3).unwrap();

        assert_eq!(session.board().get(5, 3), Cell::Red);
        assert_eq!(session.current_player(), Player::Yellow);
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.move_history(), ["Red plays column 4"]);

        session.play(3).unwrap();
        assert_eq!(session.board().get(4, 3), Cell::Yellow);
        assert_eq!(session.current_player(), Player::Red);
        assert_eq!(
            session.move_history(),
            ["Red plays column 4", "Yellow plays column 4"]
        );
    }

    #[test]
    fn test_invalid_column_leaves_state_unchanged() {
        let mut session = GameSession::new();
        session.play(2).unwrap();

        let before = session.clone();
        assert_eq!(session.play(7), Err(MoveError::InvalidColumn));
        assert_eq!(session, before);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut session = GameSession::new();
        // Six alternating pieces fill column 0 without a win
        for _ in 0..6 {
            session.play(0).unwrap();
        }
        assert!(session.is_column_full(0));
        assert_eq!(session.current_player(), Player::Red);

        let before = session.clone();
        assert_eq!(session.play(0), Err(MoveError::ColumnFull));
        assert_eq!(session, before);
    }

    #[test]
    fn test_vertical_win() {
        let mut session = GameSession::new();
        play_red_vertical_win(&mut session);

        assert!(session.is_game_over());
        assert_eq!(session.winner(), Some(Player::Red));
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert_eq!(session.wins(Player::Red), 1);
        assert_eq!(session.wins(Player::Yellow), 0);
        // Turn does not advance past a terminal move
        assert_eq!(session.current_player(), Player::Red);

        let play = session.winning_play().expect("winning line recorded");
        assert_eq!(play.cells(), &[(2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_horizontal_win_coordinates() {
        let mut session = GameSession::new();
        // Red builds the bottom row left to right, Yellow stacks column 6
        for &col in &[0, 6, 1, 6, 2, 6] {
            session.play(col).unwrap();
        }
        session.play(3).unwrap();

        assert_eq!(session.winner(), Some(Player::Red));
        let play = session.winning_play().expect("winning line recorded");
        assert_eq!(play.cells(), &[(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut session = GameSession::new();
        play_red_vertical_win(&mut session);

        let before = session.clone();
        for col in 0..7 {
            assert_eq!(session.play(col), Err(MoveError::GameOver));
        }
        assert_eq!(session, before);
    }

    #[test]
    fn test_draw_on_42nd_move() {
        let mut session = GameSession::new();
        for &col in &DRAW_SEQUENCE {
            session.play(col).unwrap();
        }

        assert_eq!(session.move_count(), 42);
        assert!(session.is_draw());
        assert!(session.is_game_over());
        assert_eq!(session.winner(), None);
        assert_eq!(session.winning_play(), None);
        assert_eq!(session.outcome(), Some(GameOutcome::Draw));
        assert_eq!(session.wins(Player::Red), 0);
        assert_eq!(session.wins(Player::Yellow), 0);
    }

    #[test]
    fn test_reset_clears_game_but_keeps_wins() {
        let mut session = GameSession::new();
        play_red_vertical_win(&mut session);
        assert_eq!(session.wins(Player::Red), 1);

        session.reset();

        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(session.board().get(row, col), Cell::Empty);
            }
        }
        assert_eq!(session.current_player(), Player::Red);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.winner(), None);
        assert_eq!(session.winning_play(), None);
        assert!(session.move_history().is_empty());
        assert!(!session.is_draw());
        assert!(!session.is_game_over());
        assert_eq!(session.wins(Player::Red), 1);
    }

    #[test]
    fn test_wins_accumulate_across_games() {
        let mut session = GameSession::new();
        for game in 1..=3 {
            play_red_vertical_win(&mut session);
            assert_eq!(session.wins(Player::Red), game);
            session.reset();
        }
        assert_eq!(session.wins(Player::Red), 3);
        assert_eq!(session.wins(Player::Yellow), 0);
    }
}
