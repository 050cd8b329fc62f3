//! Core Connect Four game logic: board representation, player types, win
//! detection, and the session state machine with cross-game statistics.

mod board;
mod player;
mod session;
mod win;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use session::{GameOutcome, GameSession, MoveError};
pub use win::WinningPlay;
