//=========================================================================
// Game Session
//=========================================================================
//
// Per-run progress: level, score, turn counter, last target, game over.
//
// Owned and mutated exclusively by the controller. Scenes only receive
// values derived from it at construction time.
//
//=========================================================================

use crate::core::catalog::ItemId;

//=== GameSession =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) level: usize,
    pub(crate) score: u32,
    pub(crate) turn_counter: u32,
    pub(crate) previous_item: Option<ItemId>,
    pub(crate) game_over: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            level: 1,
            score: 0,
            turn_counter: 0,
            previous_item: None,
            game_over: false,
        }
    }

    /// Current level, 1-based.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rounds started since the current item set was loaded.
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    /// Target of the most recent round.
    pub fn previous_item(&self) -> Option<ItemId> {
        self.previous_item
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Back to level 1 with no score.
    ///
    /// `previous_item` survives so the first round of a replay still
    /// avoids repeating the last target.
    pub fn reset(&mut self) {
        self.level = 1;
        self.score = 0;
        self.turn_counter = 0;
        self.game_over = false;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
