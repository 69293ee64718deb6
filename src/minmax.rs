//! Depth-limited minmax search over any [`GameModel`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use crate::model::GameModel;

/// Picks updates for the active player of a [`GameModel`] by looking a
/// fixed number of plies ahead.
#[derive(Debug, Clone)]
pub struct Strategist {
    max_depth: usize,
    random_ties: bool,
    /// Seeded on the first random tie-break unless set with `with_seed`.
    rng: Option<StdRng>,
}

impl Strategist {
    /// Creates a strategist looking `max_depth` plies ahead (at least one).
    ///
    /// Ties are broken deterministically in favour of the first update until
    /// [`Self::with_random_ties`] is enabled.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
            random_ties: false,
            rng: None,
        }
    }

    /// Chooses uniformly among all equally ranked best updates.
    #[must_use]
    pub fn with_random_ties(mut self, random_ties: bool) -> Self {
        self.random_ties = random_ties;
        self
    }

    /// Makes tie-breaking reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the best update for the active player of `model`, or `None`
    /// if the game is over.
    ///
    /// `model` is only read; every line of play is explored on a clone.
    #[instrument(level = "debug", skip_all, fields(depth = self.max_depth))]
    pub fn best_update<M: GameModel>(&mut self, model: &M) -> Option<M::Update> {
        let target_player = model.active_player();
        let mut updates = model.updates(target_player);
        if updates.is_empty() {
            return None;
        }

        let depth = self.max_depth;
        let scores: Vec<i32> = updates
            .par_iter()
            .map(|update| {
                let mut child = model.clone();
                child.apply(update);
                minmax(&child, target_player, depth - 1)
            })
            .collect();

        let best_score = scores.iter().copied().max()?;
        let best: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best_score)
            .map(|(idx, _)| idx)
            .collect();

        let pick = if self.random_ties && best.len() > 1 {
            best[self.tie_break(best.len())]
        } else {
            best[0]
        };

        let update = updates.swap_remove(pick);
        debug!(
            ?target_player,
            ?update,
            best_score,
            ties = best.len(),
            "search finished"
        );
        Some(update)
    }

    /// Index of the tie to play, out of `ties` equally good updates.
    fn tie_break(&mut self, ties: usize) -> usize {
        if self.rng.is_none() {
            self.rng = StdRng::try_from_os_rng()
                .inspect_err(|err| warn!(%err, "no OS randomness, first update wins ties"))
                .ok();
        }
        self.rng.as_mut().map_or(0, |rng| rng.random_range(0..ties))
    }
}

/// Recursive minmax logic including the recursion end conditions.
///
/// Returns the score of `model` for `target_player`, assuming the target
/// maximizes and the opponent minimizes on their turns.
fn minmax<M: GameModel>(model: &M, target_player: M::Player, depth: usize) -> i32 {
    let current_player = model.active_player();
    let updates = model.updates(current_player);

    // Game over, or too deep: take the position's score as is.
    if depth == 0 || updates.is_empty() {
        return model.score(target_player);
    }

    if current_player == target_player {
        minmax_step(
            model,
            target_player,
            &updates,
            depth,
            i32::MIN,
            |new, best| new > best,
        )
    } else {
        minmax_step(
            model,
            target_player,
            &updates,
            depth,
            i32::MAX,
            |new, best| new < best,
        )
    }
}

/// One level of minmax: applies every update to a clone and keeps the score
/// `better_score` prefers.
fn minmax_step<M: GameModel>(
    model: &M,
    target_player: M::Player,
    updates: &[M::Update],
    depth: usize,
    initial_score: i32,
    better_score: impl Fn(i32, i32) -> bool,
) -> i32 {
    let mut best_score = initial_score;

    for update in updates {
        let mut child = model.clone();
        child.apply(update);

        let score = minmax(&child, target_player, depth - 1);
        if better_score(score, best_score) {
            best_score = score;
        }
    }

    best_score
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::BoardModel;
    use crate::{Board, Chip, Move, Player};

    /// Pile of stones; players alternately take one or two, whoever takes
    /// the last stone wins.
    #[derive(Debug, Clone)]
    struct Pile {
        stones: u32,
        active: u8,
    }

    impl GameModel for Pile {
        type Player = u8;
        type Update = u32;

        fn players(&self) -> [u8; 2] {
            [0, 1]
        }

        fn active_player(&self) -> u8 {
            self.active
        }

        fn updates(&self, _player: u8) -> Vec<u32> {
            (1..=2).filter(|&take| take <= self.stones).collect()
        }

        fn apply(&mut self, update: &u32) {
            self.stones -= update;
            self.active = 1 - self.active;
        }

        fn score(&self, player: u8) -> i32 {
            match self.stones {
                // The player who just moved took the last stone.
                0 if player != self.active => 1,
                0 => -1,
                _ => 0,
            }
        }
    }

    #[test]
    fn works_for_any_game_model() {
        let pile = Pile {
            stones: 4,
            active: 0,
        };
        let mut strategist = Strategist::new(5);
        assert_eq!(strategist.best_update(&pile), Some(1));

        let empty = Pile {
            stones: 0,
            active: 0,
        };
        assert_eq!(strategist.best_update(&empty), None);
    }

    #[test]
    fn no_move_on_finished_board() {
        let mut board = Board::<7, 6>::new();
        for col in 0..4 {
            board.place(Chip::Red, col);
        }
        board.set_current_player(Player::Two);

        let mut strategist = Strategist::new(3);
        assert_eq!(strategist.best_update(&BoardModel::new(&board)), None);
    }

    #[test]
    fn takes_winning_move() {
        let mut board = Board::<7, 6>::new();
        for col in 0..3 {
            board.apply_hypothetical(Move::new(col)); // Player one, row 0
            board.apply_hypothetical(Move::new(col)); // Player two, row 1
        }
        assert_eq!(board.current_player(), Player::One);

        let mut strategist = Strategist::new(1);
        assert_eq!(
            strategist.best_update(&BoardModel::new(&board)),
            Some(Move::new(3))
        );
    }

    #[test]
    fn blocks_opponent_win() {
        let mut board = Board::<7, 6>::new();
        for col in 0..3 {
            board.place(Chip::Black, col);
        }
        board.place(Chip::Red, 6);
        board.place(Chip::Red, 6);
        board.place(Chip::Red, 5);
        assert_eq!(board.current_player(), Player::One);

        // One ply only sees its own moves; the threat needs two.
        let mut strategist = Strategist::new(2);
        assert_eq!(
            strategist.best_update(&BoardModel::new(&board)),
            Some(Move::new(3))
        );
    }

    #[test]
    fn search_leaves_model_untouched() {
        let mut board = Board::<7, 6>::new();
        board.place(Chip::Red, 3);
        board.switch_turn();
        let model = BoardModel::new(&board);
        let before = model.clone();

        let mut strategist = Strategist::new(3);
        let _ = strategist.best_update(&model);
        assert_eq!(model, before);
        assert_eq!(model.board(), &board);
    }

    #[test]
    fn ties_break_to_first_update_by_default() {
        let model = BoardModel::new(&Board::<7, 6>::new());
        let mut strategist = Strategist::new(1);
        assert_eq!(strategist.best_update(&model), Some(Move::new(0)));
    }

    #[test]
    fn random_ties_spread_over_equal_moves() {
        let model = BoardModel::new(&Board::<7, 6>::new());
        let chosen: HashSet<Move> = (0..64)
            .filter_map(|seed| {
                Strategist::new(1)
                    .with_random_ties(true)
                    .with_seed(seed)
                    .best_update(&model)
            })
            .collect();
        assert!(chosen.len() > 1, "always chose {chosen:?}");
    }

    #[test]
    fn seeded_tie_breaks_are_reproducible() {
        let model = BoardModel::new(&Board::<7, 6>::new());
        let run = || {
            let mut strategist = Strategist::new(1).with_random_ties(true).with_seed(7);
            (0..5)
                .map(|_| strategist.best_update(&model))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn deterministic_search_never_seeds() {
        let model = BoardModel::new(&Board::<7, 6>::new());
        let mut strategist = Strategist::new(1);
        assert!(strategist.rng.is_none());
        assert_eq!(strategist.best_update(&model), Some(Move::new(0)));
        assert!(strategist.rng.is_none());

        let mut strategist = Strategist::new(1).with_random_ties(true);
        assert!(strategist.rng.is_none());
        assert!(strategist.best_update(&model).is_some());
        assert!(strategist.rng.is_some());
    }

    #[test]
    fn depth_is_at_least_one() {
        assert_eq!(Strategist::new(0).max_depth(), 1);
        assert_eq!(Strategist::new(6).max_depth(), 6);
    }
}
