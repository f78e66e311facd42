use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use jeopardy_protocol::{CategoryId, ClueRecord};
use serde::{Deserialize, Serialize};

use crate::*;

/// How much of a clue has been shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// Text currently shown for this clue, `None` while hidden.
    pub fn shown_text(&self) -> Option<&str> {
        match self.reveal_state {
            RevealState::Hidden => None,
            RevealState::Question => Some(&self.question),
            RevealState::Answer => Some(&self.answer),
        }
    }

    /// Advances `Hidden -> Question -> Answer`. `Answer` is terminal.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;
        match self.reveal_state {
            Hidden => {
                self.reveal_state = Question;
                RevealOutcome::ShowedQuestion
            }
            Question => {
                self.reveal_state = Answer;
                RevealOutcome::ShowedAnswer
            }
            Answer => RevealOutcome::NoChange,
        }
    }
}

impl From<&ClueRecord> for Clue {
    fn from(record: &ClueRecord) -> Self {
        Self::new(record.question.clone(), record.answer.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub clues: Vec<Clue>,
}

/// Position of a clue cell: `row` picks the clue, `column` picks the category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub row: usize,
    pub column: usize,
}

impl CellKey {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Categories in column order, each holding the same number of clues.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Checks the shape invariants: at least one category, equal clue counts, no repeated ids.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let rows = categories.first().map_or(0, |category| category.clues.len());
        if rows == 0 {
            return Err(TriviaError::InvalidArgument("a board needs at least one clue"));
        }
        if categories.iter().any(|category| category.clues.len() != rows) {
            return Err(TriviaError::InvalidArgument(
                "every category needs the same number of clues",
            ));
        }
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|other| other.id == category.id) {
                return Err(TriviaError::InvalidArgument("duplicate category on board"));
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    /// Number of clues per category.
    pub fn rows(&self) -> usize {
        self.categories
            .first()
            .map_or(0, |category| category.clues.len())
    }

    pub fn validate_key(&self, key: CellKey) -> Result<CellKey> {
        if key.row < self.rows() && key.column < self.columns() {
            Ok(key)
        } else {
            Err(TriviaError::InvalidCell {
                row: key.row,
                column: key.column,
            })
        }
    }

    pub fn reveal(&mut self, key: CellKey) -> Result<RevealOutcome> {
        let key = self.validate_key(key)?;
        let outcome = self.categories[key.column].clues[key.row].reveal();
        log::trace!("reveal {:?}: {:?}", key, outcome);
        Ok(outcome)
    }

    pub fn answered_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| &category.clues)
            .filter(|clue| clue.reveal_state().is_answered())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.rows() * self.columns()
    }
}

impl Index<CellKey> for Board {
    type Output = Clue;

    fn index(&self, key: CellKey) -> &Self::Output {
        &self.categories[key.column].clues[key.row]
    }
}
