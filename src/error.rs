use thiserror::Error;

use crate::crossword::Variable;

/// Errors raised while building a [`Crossword`](crate::Crossword) structural model.
///
/// An unsatisfiable puzzle is not an error; see [`FillOutcome`](crate::fill::FillOutcome).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrosswordError {
    #[error("variable {variable} has length {}, but slots need at least 2 cells", .variable.length)]
    TooShort { variable: Variable },

    #[error("variable {variable} runs past the last addressable cell")]
    OutOfGrid { variable: Variable },

    #[error("variable {0} is listed more than once")]
    DuplicateVariable(Variable),

    #[error("overlap refers to {0}, which is not a variable of this crossword")]
    UnknownVariable(Variable),

    #[error("variable {0} cannot overlap itself")]
    SelfOverlap(Variable),

    #[error("overlap index {index} is out of bounds for {variable}")]
    OverlapOutOfBounds { variable: Variable, index: usize },

    #[error("overlap between {0} and {1} is given more than once")]
    DuplicateOverlap(Variable, Variable),

    #[error("{0} and {1} share more than one cell")]
    ParallelOverlap(Variable, Variable),

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("grid row {row} has width {found}, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CrosswordError>;
