//! Game logic and state management.
//!
//! This module provides the high-level logic that orchestrates the core data
//! structures into a playable game:
//!
//! - [`Game`] - single-game state machine (board, turn, status)
//! - [`ScoreBoard`] - win/draw tally across consecutive games
//! - [`GameSession`] - multi-game session: mode handling, score keeping,
//!   the deferred automated reply, and the output event queue
//! - [`GameEvent`] - outputs consumed by the presentation layer
//!
//! # Game Flow
//!
//! 1. The presentation layer forwards a cell activation to
//!    [`GameSession::activate_cell`]
//! 2. The session validates and applies the move through [`Game`]
//! 3. Win/draw detection decides the outcome; the session records terminal
//!    results on the [`ScoreBoard`] and emits [`GameEvent`]s
//! 4. In human-vs-automated mode, a reply by the automated player is
//!    scheduled and fires a few ticks later via
//!    [`GameSession::increment_frame`]
//!
//! # Example
//!
//! ```
//! use oxitac_engine::{FirstEmptyPolicy, GameMode, GameSession};
//!
//! let mut session = GameSession::new(
//!     60,
//!     GameMode::HumanVsHuman,
//!     Box::new(FirstEmptyPolicy),
//! );
//!
//! session.activate_cell(4).unwrap();
//!
//! while let Some(event) = session.pop_event() {
//!     println!("{event:?}");
//! }
//! ```

pub use self::{event::*, game::*, score_board::*, session::*};

mod event;
mod game;
mod score_board;
mod session;
