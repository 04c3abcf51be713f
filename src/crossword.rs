use crate::{
    error::{CrosswordError, Result},
    parse::parse_variables,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A slot in the grid: a straight run of cells that holds one word.
///
/// Two variables are equal iff all four attributes match. The derived `Ord` (row, column,
/// direction, length) is what the solver uses to break ties deterministically.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Variable {
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(start_row: usize, start_col: usize, direction: Direction, length: usize) -> Variable {
        Variable {
            start_row,
            start_col,
            direction,
            length,
        }
    }

    pub fn across(start_row: usize, start_col: usize, length: usize) -> Variable {
        Variable::new(start_row, start_col, Direction::Across, length)
    }

    pub fn down(start_row: usize, start_col: usize, length: usize) -> Variable {
        Variable::new(start_row, start_col, Direction::Down, length)
    }

    /// The `(row, col)` cells covered by this variable, from its first letter to its last.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |index| match self.direction {
            Direction::Across => (self.start_row, self.start_col + index),
            Direction::Down => (self.start_row + index, self.start_col),
        })
    }

    /// Position of `cell` within this variable's word, if the variable covers it.
    pub fn offset_of(&self, (row, col): (usize, usize)) -> Option<usize> {
        let offset = match self.direction {
            Direction::Across if row == self.start_row && col >= self.start_col => {
                col - self.start_col
            }
            Direction::Down if col == self.start_col && row >= self.start_row => {
                row - self.start_row
            }
            _ => return None,
        };
        (offset < self.length).then_some(offset)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) of length {}",
            self.direction, self.start_row, self.start_col, self.length
        )
    }
}

/// Immutable structural model of a puzzle: its variables and the overlaps between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    variables: Vec<Variable>,
    // Both orientations are stored; `(x, y) -> (i, j)` means `x[i]` and `y[j]` share a cell.
    overlaps: FxHashMap<(Variable, Variable), (usize, usize)>,
    neighbors: FxHashMap<Variable, Vec<Variable>>,
}

impl Crossword {
    /// Builds a model from variables alone, deriving overlaps from the cells they cover.
    pub fn new(variables: Vec<Variable>) -> Result<Crossword> {
        // cells are only walked for variables that fit in the grid
        for variable in &variables {
            check_variable(variable)?;
        }

        let mut overlaps = vec![];
        for (i, x) in variables.iter().enumerate() {
            for y in &variables[i + 1..] {
                if x == y {
                    return Err(CrosswordError::DuplicateVariable(*x));
                }

                let mut shared = x
                    .cells()
                    .enumerate()
                    .filter_map(|(x_index, cell)| y.offset_of(cell).map(|y_index| (x_index, y_index)));

                if let Some((x_index, y_index)) = shared.next() {
                    if shared.next().is_some() {
                        return Err(CrosswordError::ParallelOverlap(*x, *y));
                    }
                    overlaps.push((*x, *y, x_index, y_index));
                }
            }
        }

        Crossword::with_overlaps(variables, overlaps)
    }

    /// Builds a model from variables and an explicit list of `(x, y, x_index, y_index)` overlaps.
    ///
    /// Each unordered pair should appear at most once; the reverse orientation is derived.
    pub fn with_overlaps<I>(variables: Vec<Variable>, overlaps: I) -> Result<Crossword>
    where
        I: IntoIterator<Item = (Variable, Variable, usize, usize)>,
    {
        let mut seen = FxHashSet::default();
        for variable in &variables {
            check_variable(variable)?;
            if !seen.insert(*variable) {
                return Err(CrosswordError::DuplicateVariable(*variable));
            }
        }

        let mut neighbors: FxHashMap<Variable, Vec<Variable>> =
            variables.iter().map(|v| (*v, vec![])).collect();
        let mut overlap_map = FxHashMap::default();

        for (x, y, x_index, y_index) in overlaps {
            for v in [x, y] {
                if !seen.contains(&v) {
                    return Err(CrosswordError::UnknownVariable(v));
                }
            }
            if x == y {
                return Err(CrosswordError::SelfOverlap(x));
            }
            for (v, index) in [(x, x_index), (y, y_index)] {
                if index >= v.length {
                    return Err(CrosswordError::OverlapOutOfBounds { variable: v, index });
                }
            }
            if overlap_map.contains_key(&(x, y)) {
                return Err(CrosswordError::DuplicateOverlap(x, y));
            }

            overlap_map.insert((x, y), (x_index, y_index));
            overlap_map.insert((y, x), (y_index, x_index));

            if let Some(list) = neighbors.get_mut(&x) {
                list.push(y);
            }
            if let Some(list) = neighbors.get_mut(&y) {
                list.push(x);
            }
        }

        Ok(Crossword {
            variables,
            overlaps: overlap_map,
            neighbors,
        })
    }

    /// Builds a model from a text grid where `*` is a blocked cell and anything else is open.
    pub fn from_grid(grid: &str) -> Result<Crossword> {
        Crossword::new(parse_variables(grid)?)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.neighbors.contains_key(variable)
    }

    /// Indices `(i, j)` such that `x[i]` and `y[j]` share a cell, or `None` if they don't cross.
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<(usize, usize)> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    pub fn neighbors(&self, variable: &Variable) -> &[Variable] {
        self.neighbors
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, variable: &Variable) -> usize {
        self.neighbors(variable).len()
    }

    /// Every ordered pair of overlapping variables.
    pub fn arcs(&self) -> Vec<(Variable, Variable)> {
        self.variables
            .iter()
            .flat_map(|x| self.neighbors(x).iter().map(move |y| (*x, *y)))
            .collect()
    }
}

fn check_variable(variable: &Variable) -> Result<()> {
    if variable.length < 2 {
        return Err(CrosswordError::TooShort {
            variable: *variable,
        });
    }
    let start = match variable.direction {
        Direction::Across => variable.start_col,
        Direction::Down => variable.start_row,
    };
    if start.checked_add(variable.length - 1).is_none() {
        return Err(CrosswordError::OutOfGrid {
            variable: *variable,
        });
    }
    Ok(())
}
