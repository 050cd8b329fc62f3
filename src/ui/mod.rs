//! Terminal UI: full-screen game view with board, running score, and move
//! history, driven by a small keyboard event loop.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
