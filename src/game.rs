//! A game session: the authoritative board, both players and the turn flow.

use tracing::{debug, info};

use crate::error::GameError;
use crate::{Board, Player, PlayerInfo, Roster, Status};

/// Outcome of a successful [`Game::play`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Turn {
    /// Who dropped the chip.
    pub player: Player,
    pub column: usize,
    /// Row the chip landed in, 0 being the bottom.
    pub row: usize,
    /// Where the game stands after the move.
    pub status: Status,
}

/// Game with all its state.
///
/// Human and computer moves both go through [`Game::play`]; the session is
/// the only writer of its board.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Game<const W: usize = 7, const H: usize = 6> {
    board: Board<W, H>,
    roster: Roster,
    first_player: Player,
    round: usize,
    status: Status,
}

impl<const W: usize, const H: usize> Game<W, H> {
    #[must_use]
    pub fn new(roster: Roster, first_player: Player) -> Self {
        Self {
            board: Board::with_first_player(first_player),
            roster,
            first_player,
            round: 0,
            status: Status::InProgress,
        }
    }

    /// Drops the current player's chip into `column`.
    ///
    /// On success the round advances and, unless the move ended the game,
    /// the turn passes to the opponent. A refused move changes nothing.
    pub fn play(&mut self, column: usize) -> Result<Turn, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if column >= W {
            return Err(GameError::InvalidColumn { column, columns: W });
        }

        let player = self.board.current_player();
        let row = self
            .board
            .place(player.chip(), column)
            .ok_or(GameError::ColumnFull { column })?;
        self.round += 1;

        self.status = if self.board.is_win(player) {
            Status::Won(player)
        } else if self.board.is_full() {
            Status::Draw
        } else {
            self.board.switch_turn();
            Status::InProgress
        };

        debug!(%player, column, row, round = self.round, "chip placed");
        if self.status.is_over() {
            info!(status = ?self.status, rounds = self.round, "game over");
        }

        Ok(Turn {
            player,
            column,
            row,
            status: self.status,
        })
    }

    /// Starts over with an empty board, keeping players and first mover.
    pub fn reset(&mut self) {
        self.board = Board::with_first_player(self.first_player);
        self.round = 0;
        self.status = Status::InProgress;
    }

    #[must_use]
    pub const fn board(&self) -> &Board<W, H> {
        &self.board
    }

    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The player to move, or the winner once the game is won.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.board.current_player()
    }

    #[must_use]
    pub const fn current_info(&self) -> &PlayerInfo {
        self.roster.info(self.board.current_player())
    }

    /// Title line for the current state, e.g. `"AI (BLACK) Wins!"`.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.status {
            Status::InProgress => format!("{}'s Turn", self.current_info().name()),
            Status::Won(player) => format!("{} Wins!", self.roster.info(player).name()),
            Status::Draw => "It's a Draw!".to_string(),
        }
    }
}

impl<const W: usize, const H: usize> Default for Game<W, H> {
    fn default() -> Self {
        Self::new(Roster::default(), Player::One)
    }
}
