//! The seam between a game state and an adversarial search.
//!
//! A search only ever sees a [`GameModel`]: it asks who is to move, which
//! updates are available, applies them to its own copies and scores the
//! resulting positions. [`BoardModel`] adapts a [`Board`] snapshot to it, so
//! the board itself stays a plain data model.

use crate::{Board, Move, Player};

/// State of a deterministic two-player game as seen by a search.
pub trait GameModel: Clone + Send + Sync {
    type Player: Copy + Eq + Send + Sync + core::fmt::Debug;
    type Update: Clone + Send + Sync + core::fmt::Debug;

    /// Both participants, in turn order.
    fn players(&self) -> [Self::Player; 2];

    /// The player whose turn it is.
    fn active_player(&self) -> Self::Player;

    /// Updates `player` could apply. Empty when the game is over.
    fn updates(&self, player: Self::Player) -> Vec<Self::Update>;

    /// Applies an update for the active player and passes the turn.
    fn apply(&mut self, update: &Self::Update);

    /// Utility of the state for `player`; higher is better.
    fn score(&self, player: Self::Player) -> i32;
}

/// [`GameModel`] over a snapshot of a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel<const W: usize = 7, const H: usize = 6> {
    board: Board<W, H>,
}

impl<const W: usize, const H: usize> BoardModel<W, H> {
    /// Wraps a snapshot of `board`; the board itself is never touched.
    #[must_use]
    pub fn new(board: &Board<W, H>) -> Self {
        Self {
            board: board.snapshot(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board<W, H> {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board<W, H> {
        self.board
    }
}

impl<const W: usize, const H: usize> GameModel for BoardModel<W, H> {
    type Player = Player;
    type Update = Move;

    fn players(&self) -> [Player; 2] {
        Player::ALL
    }

    fn active_player(&self) -> Player {
        self.board.current_player()
    }

    fn updates(&self, player: Player) -> Vec<Move> {
        self.board.legal_moves(player)
    }

    fn apply(&mut self, update: &Move) {
        self.board.apply_hypothetical(*update);
    }

    fn score(&self, player: Player) -> i32 {
        self.board.score(player)
    }
}
