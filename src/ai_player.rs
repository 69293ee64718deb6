use tracing::debug;

use crate::Game;
use crate::config::AiConfig;
use crate::minmax::Strategist;
use crate::model::BoardModel;

/// Computer opponent choosing columns for a [`Game`].
#[derive(Debug, Clone)]
pub struct AiPlayer {
    strategist: Strategist,
    open_center: bool,
}

impl AiPlayer {
    #[must_use]
    pub fn new(config: &AiConfig) -> Self {
        let strategist = Strategist::new(config.depth)
            .with_random_ties(config.random_ties);
        let strategist = match config.seed {
            Some(seed) => strategist.with_seed(seed),
            None => strategist,
        };
        Self {
            strategist,
            open_center: config.open_center,
        }
    }

    /// Picks a column for the player to move, or `None` once the game is
    /// over.
    ///
    /// The search runs on a snapshot; the game's board is never touched.
    #[must_use]
    pub fn choose_column<const W: usize, const H: usize>(
        &mut self,
        game: &Game<W, H>,
    ) -> Option<usize> {
        if game.is_over() {
            return None;
        }

        // Optimization: Take middle when not taken yet
        if self.open_center && game.round() < 2 {
            let middle = W / 2;
            if game.board().free_slots_in_column(middle) == H {
                debug!(column = middle, "opening in the centre");
                return Some(middle);
            }
        }

        let model = BoardModel::new(game.board());
        self.strategist.best_update(&model).map(usize::from)
    }
}
