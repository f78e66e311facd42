use jeopardy_protocol::DEFAULT_CATEGORY_POOL_SIZE;
use serde::{Deserialize, Serialize};

use crate::*;

/// Shape of a board and the limits used while filling it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Columns of the board.
    pub categories: usize,
    /// Rows of the board, and the minimum clue count a category needs to be picked.
    pub clues_per_category: usize,
    /// Number of categories the data source can enumerate by offset.
    pub category_pool_size: u32,
    /// Cap on summary requests made while picking category ids.
    pub max_category_attempts: u32,
}

impl BoardConfig {
    pub const NUM_CATEGORIES: usize = 6;
    pub const NUM_QUESTIONS_PER_CAT: usize = 5;
    pub const MAX_CATEGORY_ATTEMPTS: u32 = 120;

    pub const fn new(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool_size: DEFAULT_CATEGORY_POOL_SIZE,
            max_category_attempts: Self::MAX_CATEGORY_ATTEMPTS,
        }
    }

    pub const fn with_pool_size(self, category_pool_size: u32) -> Self {
        Self {
            category_pool_size,
            ..self
        }
    }

    pub const fn with_max_attempts(self, max_category_attempts: u32) -> Self {
        Self {
            max_category_attempts,
            ..self
        }
    }

    pub const fn total_cells(&self) -> usize {
        self.categories.saturating_mul(self.clues_per_category)
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories == 0 {
            return Err(TriviaError::InvalidArgument("a board needs at least one category"));
        }
        if self.clues_per_category == 0 {
            return Err(TriviaError::InvalidArgument("a category needs at least one clue"));
        }
        if (self.category_pool_size as usize) < self.categories {
            return Err(TriviaError::InvalidArgument(
                "category pool is smaller than the board",
            ));
        }
        if (self.max_category_attempts as usize) < self.categories {
            return Err(TriviaError::InvalidArgument(
                "attempt cap is lower than the number of categories",
            ));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(Self::NUM_CATEGORIES, Self::NUM_QUESTIONS_PER_CAT)
    }
}
