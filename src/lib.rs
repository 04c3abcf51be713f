//! Crossword filling as a constraint satisfaction problem.
//!
//! Every slot of the grid is a [`Variable`] whose domain starts as the whole word list. Domains
//! are pruned by word length (node consistency) and by crossing letters (AC-3), then a
//! backtracking search picks words using the minimum-remaining-values and degree heuristics for
//! slots and the least-constraining-value heuristic for words.
//!
//! ```
//! use xwords_csp::{solve, Crossword};
//!
//! let crossword = Crossword::from_grid("
//! __
//! __
//! ").unwrap();
//!
//! let solution = solve(&crossword, vec!["AB", "CD", "AC", "BD"]).unwrap();
//! assert!(solution.is_consistent(&crossword));
//! ```

pub mod arc;
pub mod assignment;
pub mod crossword;
pub mod domain;
pub mod error;
pub mod fill;
pub mod order;
mod parse;

pub use crate::{
    assignment::Assignment,
    crossword::{Crossword, Direction, Variable},
    domain::Domains,
    error::{CrosswordError, Result},
    fill::{backtrack::BacktrackingFiller, FillConfig, FillOutcome, Filler, Statistics},
};

/// Fills `crossword` with the default configuration, or returns `None` if it cannot be filled.
pub fn solve<I, S>(crossword: &Crossword, words: I) -> Option<Assignment>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BacktrackingFiller::default()
        .fill(crossword, words)
        .solution()
}

#[cfg(test)]
mod tests {
    use crate::{solve, Crossword, Variable};
    use test_log::test;

    #[test]
    fn solve_works() {
        let crossword = Crossword::new(vec![Variable::across(0, 0, 2)]).unwrap();

        let solution = solve(&crossword, vec!["AB", "CD"]).unwrap();

        assert!(solution.is_complete(&crossword));
        assert!(solve(&crossword, vec!["ABC"]).is_none());
    }
}
