//! Arc consistency for crossing slots (AC-3).
//!
//! An arc `(x, y)` is consistent when every word left for `x` has at least one word left for `y`
//! with the same letter in the cell they share. Propagation keeps revising arcs from a FIFO
//! worklist until nothing changes or some domain is wiped out.

use crate::{
    crossword::{Crossword, Variable},
    domain::{letter_at, Domains},
};
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Makes `x` arc-consistent with `y`, removing every word of `x` with no support in `y`.
///
/// Returns whether anything was removed. Pairs that don't overlap are left alone.
pub fn revise(crossword: &Crossword, domains: &mut Domains, x: &Variable, y: &Variable) -> bool {
    let (x_index, y_index) = match crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    // read-only pass over y, then a single retain over x
    let supported: FxHashSet<char> = match domains.get(y) {
        Some(domain) => domain
            .iter()
            .filter_map(|word| letter_at(word, y_index))
            .collect(),
        None => return false,
    };

    let domain = match domains.get_mut(x) {
        Some(domain) => domain,
        None => return false,
    };

    let before = domain.len();
    domain.retain(|word| letter_at(word, x_index).map_or(false, |c| supported.contains(&c)));
    let removed = before - domain.len();

    if removed > 0 {
        trace!("revise {} against {}: removed {} of {}", x, y, removed, before);
    }
    removed > 0
}

/// Runs AC-3 to a fixed point.
///
/// With `arcs == None` the worklist starts with every overlapping ordered pair; otherwise only
/// with the given arcs. Returns false as soon as a domain is emptied, true once the worklist
/// drains.
pub fn enforce_arc_consistency(
    crossword: &Crossword,
    domains: &mut Domains,
    arcs: Option<Vec<(Variable, Variable)>>,
) -> bool {
    let mut queue: VecDeque<(Variable, Variable)> = match arcs {
        Some(arcs) => arcs.into(),
        None => crossword.arcs().into(),
    };
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop_front() {
        if !revise(crossword, domains, &x, &y) {
            continue;
        }
        revisions += 1;

        if domains.remaining(&x) == 0 {
            debug!("arc consistency wiped out {} after {} revisions", x, revisions);
            return false;
        }

        for z in crossword.neighbors(&x) {
            if *z != y {
                queue.push_back((*z, x));
            }
        }
    }

    trace!("arc consistency reached a fixed point after {} revisions", revisions);
    true
}

/// Whether every arc of `crossword` is consistent under `domains`.
pub fn is_arc_consistent(crossword: &Crossword, domains: &Domains) -> bool {
    crossword.arcs().iter().all(|(x, y)| {
        let (x_index, y_index) = match crossword.overlap(x, y) {
            Some(overlap) => overlap,
            None => return true,
        };
        let (xs, ys) = match (domains.get(x), domains.get(y)) {
            (Some(xs), Some(ys)) => (xs, ys),
            _ => return true,
        };

        xs.iter().all(|word_x| {
            ys.iter()
                .any(|word_y| letter_at(word_x, x_index) == letter_at(word_y, y_index))
        })
    })
}
