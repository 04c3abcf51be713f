use crate::{
    crossword::{Direction, Variable},
    error::{CrosswordError, Result},
};

const BLOCKED: char = '*';

/// Open/blocked layout of a rectangular grid, row-major.
struct Layout {
    open: Vec<bool>,
    width: usize,
    height: usize,
}

impl Layout {
    fn parse(grid: &str) -> Result<Layout> {
        let mut rows: Vec<&str> = grid.lines().collect();
        // lets a grid literal start and end on its own line
        if rows.first().map_or(false, |row| row.is_empty()) {
            rows.remove(0);
        }
        if rows.last().map_or(false, |row| row.is_empty()) {
            rows.pop();
        }

        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(CrosswordError::EmptyGrid);
        }

        let mut open = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(CrosswordError::RaggedGrid {
                    row,
                    expected: width,
                    found,
                });
            }
            open.extend(line.chars().map(|c| c != BLOCKED));
        }

        Ok(Layout {
            open,
            width,
            height: rows.len(),
        })
    }

    fn is_open(&self, row: usize, col: usize) -> bool {
        self.open[row * self.width + col]
    }
}

/// Scans one line of the grid, pushing a variable for every run of at least two open cells.
fn scan_line(
    cells: impl Iterator<Item = ((usize, usize), bool)>,
    direction: Direction,
    result: &mut Vec<Variable>,
) {
    let mut start = None;
    let mut length = 0;

    for (cell, open) in cells {
        if open {
            // found an open cell; is it our first?
            if start.is_none() {
                start = Some(cell);
            }
            length += 1;
        } else {
            if let Some((start_row, start_col)) = start.take() {
                if length > 1 {
                    result.push(Variable::new(start_row, start_col, direction, length));
                }
            }
            length = 0;
        }
    }

    // have to process end of line
    if let Some((start_row, start_col)) = start {
        if length > 1 {
            result.push(Variable::new(start_row, start_col, direction, length));
        }
    }
}

/// Finds every variable of a text grid. Across variables come first in row-major order, then Down
/// variables in column-major order.
pub(crate) fn parse_variables(grid: &str) -> Result<Vec<Variable>> {
    let layout = Layout::parse(grid)?;
    let mut result = vec![];

    for row in 0..layout.height {
        let cells = (0..layout.width).map(|col| ((row, col), layout.is_open(row, col)));
        scan_line(cells, Direction::Across, &mut result);
    }

    for col in 0..layout.width {
        let cells = (0..layout.height).map(|row| ((row, col), layout.is_open(row, col)));
        scan_line(cells, Direction::Down, &mut result);
    }

    Ok(result)
}
