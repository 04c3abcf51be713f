use crate::{assignment::Assignment, crossword::Crossword};
use std::time::Duration;

pub mod backtrack;

/// Something that fills a crossword from a word list.
pub trait Filler {
    fn fill<I, S>(&mut self, crossword: &Crossword, words: I) -> FillOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;
}

/// How a fill attempt ended. Running out of options is an answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// A complete, consistent assignment.
    Solved(Assignment),
    /// No assignment satisfies every constraint.
    Unsatisfiable,
    /// The search hit `FillConfig::max_states` before finishing.
    BudgetExhausted,
}

impl FillOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, FillOutcome::Solved(_))
    }

    pub fn solution(self) -> Option<Assignment> {
        match self {
            FillOutcome::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillConfig {
    /// Re-run arc consistency after each tentative assignment.
    pub inference: bool,
    /// Try the least constraining word first; otherwise words are tried in lexicographic order.
    pub least_constraining_value: bool,
    /// Give up after visiting this many search states.
    pub max_states: Option<usize>,
}

impl Default for FillConfig {
    fn default() -> FillConfig {
        FillConfig {
            inference: false,
            least_constraining_value: true,
            max_states: None,
        }
    }
}

impl FillConfig {
    pub fn with_inference(mut self, inference: bool) -> FillConfig {
        self.inference = inference;
        self
    }

    pub fn with_least_constraining_value(mut self, enabled: bool) -> FillConfig {
        self.least_constraining_value = enabled;
        self
    }

    pub fn with_max_states(mut self, max_states: usize) -> FillConfig {
        self.max_states = Some(max_states);
        self
    }
}

/// Counters for the most recent fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub states: usize,
    pub backtracks: usize,
    pub node_consistency_pruned: usize,
    pub arc_consistency_pruned: usize,
    pub total_time: Duration,
}
