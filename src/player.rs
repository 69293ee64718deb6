//! Chips, player identities and the per-session roster.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Content of a single slot of the board.
#[derive(Debug, Default, PartialOrd, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Chip {
    #[default]
    Empty,
    /// Chip of [`Player::One`].
    Red,
    /// Chip of [`Player::Two`].
    Black,
}

impl Chip {
    /// Returns the player owning this chip, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Red => Some(Player::One),
            Self::Black => Some(Player::Two),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Plain ASCII symbol used when the board is printed.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Red => 'X',
            Self::Black => 'O',
        }
    }
}

/// One of the two participants of a game.
///
/// A player is a pure identity: its chip, default name and default color are
/// functions of the identity, and so is [`Player::opponent`].
#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    #[must_use]
    pub const fn chip(self) -> Chip {
        match self {
            Self::One => Chip::Red,
            Self::Two => Chip::Black,
        }
    }

    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::One => "PLAYER ONE (RED)",
            Self::Two => "AI (BLACK)",
        }
    }

    #[must_use]
    pub const fn default_color(self) -> Color {
        match self {
            Self::One => Color::Red,
            Self::Two => Color::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("player one"),
            Self::Two => f.write_str("player two"),
        }
    }
}

/// Display color of a player's chips.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Yellow,
    Blue,
    Green,
}

impl Color {
    /// ANSI escape sequence selecting this color as foreground.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[1;31m",
            // Bright black, plain black is invisible on dark terminals.
            Self::Black => "\x1b[1;90m",
            Self::Yellow => "\x1b[1;33m",
            Self::Blue => "\x1b[1;34m",
            Self::Green => "\x1b[1;32m",
        }
    }

    pub const ANSI_RESET: &'static str = "\x1b[0m";
}

/// Display identity of a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    player: Player,
    name: String,
    color: Color,
}

impl PlayerInfo {
    #[must_use]
    pub fn new(player: Player, name: impl Into<String>, color: Color) -> Self {
        Self {
            player,
            name: name.into(),
            color,
        }
    }

    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub const fn chip(&self) -> Chip {
        self.player.chip()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// The two players of a session. Built once and owned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    one: PlayerInfo,
    two: PlayerInfo,
}

impl Roster {
    /// Creates a roster from the display identities of both players.
    ///
    /// The [`Player`] stored in each info is overwritten with the seat it is
    /// passed for, so the roster always holds exactly one entry per player.
    #[must_use]
    pub fn new(mut one: PlayerInfo, mut two: PlayerInfo) -> Self {
        one.player = Player::One;
        two.player = Player::Two;
        Self { one, two }
    }

    #[must_use]
    pub const fn info(&self, player: Player) -> &PlayerInfo {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerInfo> {
        [&self.one, &self.two].into_iter()
    }
}

impl Default for Roster {
    fn default() -> Self {
        let info = |p: Player| PlayerInfo::new(p, p.default_name(), p.default_color());
        Self::new(info(Player::One), info(Player::Two))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn chips_belong_to_their_player() {
        assert_eq!(Player::One.chip(), Chip::Red);
        assert_eq!(Player::Two.chip(), Chip::Black);
        for player in Player::ALL {
            assert_eq!(player.chip().owner(), Some(player));
        }
        assert_eq!(Chip::Empty.owner(), None);
        assert!(Chip::default().is_empty());
    }

    #[test]
    fn default_roster_uses_default_names() {
        let roster = Roster::default();
        assert_eq!(roster.info(Player::One).name(), "PLAYER ONE (RED)");
        assert_eq!(roster.info(Player::Two).name(), "AI (BLACK)");
        assert_eq!(roster.info(Player::One).color(), Color::Red);
        assert_eq!(roster.info(Player::Two).color(), Color::Black);
    }

    #[test]
    fn roster_pins_seats() {
        // Both infos claim to be player one; the roster fixes the second.
        let roster = Roster::new(
            PlayerInfo::new(Player::One, "Ada", Color::Yellow),
            PlayerInfo::new(Player::One, "Bob", Color::Blue),
        );
        assert_eq!(roster.info(Player::Two).player(), Player::Two);
        assert_eq!(roster.info(Player::Two).name(), "Bob");
        assert_eq!(roster.info(Player::Two).chip(), Chip::Black);
        assert_eq!(roster.iter().count(), 2);
    }
}
