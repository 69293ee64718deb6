//! The game board: slot grid, placement and win/draw detection.

use core::fmt;

use crate::score;
use crate::{Chip, Color, Move, Player, Roster};

/// Number of chips in a row to win the game.
pub const SERIES_LEN: usize = 4;

/// Directions a winning series can run in, as `(column, row)` steps:
/// horizontal, vertical, diagonal `/` and diagonal `\`.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Where a game stands, derived from the board alone.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Status {
    /// Game continues.
    InProgress,
    /// Player has four in a row.
    Won(Player),
    /// The board is full without a winner.
    Draw,
}

impl Status {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Gameboard with `W` columns and `H` rows, plus the player to move next.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Board<const W: usize = 7, const H: usize = 6> {
    /// Board: rows --> col --> slot
    /// Technical indices correspond to the logical indices:
    ///   (row=0,col=0) <==> bottom left of game board
    slots: [[Chip; W]; H],
    current_player: Player,
}

impl<const W: usize, const H: usize> Default for Board<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Creates an empty board where [`Player::One`] moves first.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_first_player(Player::One)
    }

    #[must_use]
    pub const fn with_first_player(first: Player) -> Self {
        assert!(W >= SERIES_LEN);
        assert!(H >= SERIES_LEN);

        Self {
            slots: [[Chip::Empty; W]; H],
            current_player: first,
        }
    }

    /// Returns an independent copy of the board, including whose turn it is.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Returns the chip in the given slot, or `None` if it is off the board.
    #[must_use]
    pub fn chip(&self, column: usize, row: usize) -> Option<Chip> {
        self.slots.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns the index of the lowest empty row in the selected column.
    ///
    /// Returns `None` if the column is full or does not exist.
    #[must_use]
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= W {
            return None;
        }
        (0..H).find(|&row| self.slots[row][column].is_empty())
    }

    #[must_use]
    pub fn can_place(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_some()
    }

    /// Drops `chip` into `column` and returns the row it landed in.
    ///
    /// Placing into a full or non-existent column, or placing
    /// [`Chip::Empty`], leaves the board untouched and returns `None`.
    /// Callers that need to know whether a chip was placed check
    /// [`Self::can_place`] first or inspect the result.
    pub fn place(&mut self, chip: Chip, column: usize) -> Option<usize> {
        if chip.is_empty() {
            return None;
        }
        let row = self.lowest_empty_row(column)?;
        self.slots[row][column] = chip;
        Some(row)
    }

    /// Emits the column indices where moves are legal.
    pub fn available_columns_iter(&self) -> impl Iterator<Item = usize> {
        (0..W).filter(|&col| self.can_place(col))
    }

    /// Returns the number of free slots in the given column.
    #[must_use]
    pub fn free_slots_in_column(&self, column: usize) -> usize {
        self.lowest_empty_row(column).map_or(0, |row| H - row)
    }

    /// Returns the number of free slots in total.
    #[must_use]
    pub fn free_slots_in_total(&self) -> usize {
        (0..W).map(|col| self.free_slots_in_column(col)).sum()
    }

    /// Returns whether no column admits another chip.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available_columns_iter().next().is_none()
    }

    /// Checks whether the series of [`SERIES_LEN`] slots starting at
    /// `(column, row)` and running along `(dx, dy)` is all `chip`.
    fn series_matches(
        &self,
        chip: Chip,
        column: usize,
        row: usize,
        (dx, dy): (isize, isize),
    ) -> bool {
        let reach = SERIES_LEN as isize - 1;
        let last_col = column as isize + dx * reach;
        let last_row = row as isize + dy * reach;

        // If the series leaves the board, no win is possible from here.
        if !(0..W as isize).contains(&last_col) || !(0..H as isize).contains(&last_row) {
            return false;
        }

        (0..SERIES_LEN as isize).all(|step| {
            let col = (column as isize + dx * step) as usize;
            let row = (row as isize + dy * step) as usize;
            self.slots[row][col] == chip
        })
    }

    /// Check if `player` has four chips in a row in any direction.
    #[must_use]
    pub fn is_win(&self, player: Player) -> bool {
        let chip = player.chip();
        (0..H).any(|row| {
            (0..W).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&dir| self.series_matches(chip, col, row, dir))
            })
        })
    }

    /// Returns the player with four in a row, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.is_win(p))
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Won(player),
            None if self.is_full() => Status::Draw,
            None => Status::InProgress,
        }
    }

    /// Returns one move per playable column in ascending column order.
    ///
    /// A board where either player has already won has no successor
    /// moves, regardless of remaining empty slots.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        if self.is_win(player) || self.is_win(player.opponent()) {
            return Vec::new();
        }
        self.available_columns_iter().map(Move::new).collect()
    }

    /// Scores the board for `player`, see [`score::score`].
    #[must_use]
    pub fn score(&self, player: Player) -> i32 {
        score::score(self, player)
    }

    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    pub const fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub const fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Plays `mv` for the current player and hands the turn to the opponent.
    ///
    /// Meant for snapshots explored by a search. Returns the row the chip
    /// landed in; the turn passes even if the column was full.
    pub fn apply_hypothetical(&mut self, mv: Move) -> Option<usize> {
        let row = self.place(self.current_player.chip(), mv.column);
        self.switch_turn();
        row
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Renders the board like [`fmt::Display`], painting every chip in its
    /// owner's colour from `roster`.
    #[must_use]
    pub const fn colored<'a>(&'a self, roster: &'a Roster) -> Colored<'a, W, H> {
        Colored {
            board: self,
            roster,
        }
    }

    /// Writes the grid top row first, followed by the 1-based column numbers.
    fn write_grid(
        &self,
        f: &mut fmt::Formatter<'_>,
        write_chip: impl Fn(&mut fmt::Formatter<'_>, Chip) -> fmt::Result,
    ) -> fmt::Result {
        // Print rows reverted so that it appears naturally.
        for row in self.slots.iter().rev() {
            f.write_str("|")?;
            for &chip in row {
                write_chip(f, chip)?;
                f.write_str("|")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", "-".repeat(2 * W + 1))?;

        f.write_str(" ")?;
        for col_id in 1..=W {
            write!(f, "{} ", col_id % 10)?;
        }
        writeln!(f)
    }
}

impl<const W: usize, const H: usize> fmt::Display for Board<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, |f, chip| write!(f, "{}", chip.symbol()))
    }
}

/// A [`Board`] rendered with ANSI colours, see [`Board::colored`].
#[derive(Debug, Clone, Copy)]
pub struct Colored<'a, const W: usize, const H: usize> {
    board: &'a Board<W, H>,
    roster: &'a Roster,
}

impl<const W: usize, const H: usize> fmt::Display for Colored<'_, W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.write_grid(f, |f, chip| match chip.owner() {
            Some(player) => {
                let color = self.roster.info(player).color();
                write!(f, "{}{}{}", color.ansi(), chip.symbol(), Color::ANSI_RESET)
            }
            None => f.write_str(" "),
        })
    }
}

/// Columns of a 7x6 game, starting with player one, that ends in a draw.
#[cfg(test)]
pub(crate) const DRAW_GAME: [usize; 42] = [
    3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3, 4, 4, 0, 1,
    1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
];
