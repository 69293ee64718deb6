//! A Rust implementation of _Four in a Row_, also known as _Connect Four_.
//!
//! The crate models the board ([`Board`]), detects wins and draws and scores
//! positions ([`score`]) for an adversarial search. The search itself only
//! talks to a [`GameModel`]; [`BoardModel`] adapts a board snapshot to it and
//! [`Strategist`] is a depth-limited minmax search over any such model.
//!
//! [`Game`] is a playing session: it owns the authoritative board and both
//! players and is what front-ends (see the `four-in-a-row` binary) drive.
//!
//! ```
//! use four_in_a_row::{Game, Player, Status};
//!
//! let mut game = Game::<7, 6>::default();
//! for col in 0..3 {
//!     game.play(col).unwrap();
//!     game.play(col).unwrap();
//! }
//! assert_eq!(game.play(3).unwrap().status, Status::Won(Player::One));
//! ```

#![deny(missing_debug_implementations)]

mod ai_player;
pub mod board;
pub mod config;
pub mod error;
mod game;
pub mod minmax;
pub mod model;
mod moves;
mod player;
pub mod score;

pub use ai_player::AiPlayer;
pub use board::{Board, SERIES_LEN, Status};
pub use config::AppConfig;
pub use error::{ConfigError, GameError};
pub use game::{Game, Turn};
pub use minmax::Strategist;
pub use model::{BoardModel, GameModel};
pub use moves::Move;
pub use player::{Chip, Color, Player, PlayerInfo, Roster};
