//! # Connect Four
//!
//! A Connect Four game for the terminal. The rules engine tracks the board,
//! turn order, move history, and win counters that accumulate across games
//! within one sitting; the UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, game session
//! - [`ui`] — Terminal UI: game view, board widget, event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
