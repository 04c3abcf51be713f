use crate::{
    assignment::Assignment,
    crossword::{Crossword, Variable},
    domain::{letter_at, Domains},
};
use cached::{Cached, UnboundCache};
use core::cmp::Ordering;

#[derive(Eq, PartialEq, Debug)]
pub(crate) struct VariableScore {
    remaining: usize,
    degree: usize,
    variable: Variable,
}

impl VariableScore {
    fn new(crossword: &Crossword, domains: &Domains, variable: Variable) -> VariableScore {
        VariableScore {
            remaining: domains.remaining(&variable),
            degree: crossword.degree(&variable),
            variable,
        }
    }
}

impl PartialOrd for VariableScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VariableScore {
    /// `Less` means "fill this one first".
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining values wins
        if self.remaining != other.remaining {
            return self.remaining.cmp(&other.remaining);
        }
        // more neighbors wins
        if self.degree != other.degree {
            return other.degree.cmp(&self.degree);
        }
        self.variable.cmp(&other.variable)
    }
}

/// Picks the unassigned variable with the fewest remaining candidates, preferring the one with
/// the most neighbors on a tie. Returns `None` once every variable is assigned.
pub fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<Variable> {
    crossword
        .variables()
        .iter()
        .filter(|variable| !assignment.contains(variable))
        .map(|variable| VariableScore::new(crossword, domains, *variable))
        .min()
        .map(|score| score.variable)
}

/// Orders the candidates of `variable` so the least constraining word comes first.
///
/// A word's cost is how many words it would rule out across the domains of unassigned neighbors.
/// Ties go to the lexicographically smaller word. Domains are not modified.
pub fn order_domain_values(
    crossword: &Crossword,
    domains: &Domains,
    variable: &Variable,
    assignment: &Assignment,
) -> Vec<String> {
    let domain = match domains.get(variable) {
        Some(domain) => domain,
        None => return vec![],
    };

    // (neighbor, index in our word, index in the neighbor's word)
    let crossings: Vec<(Variable, usize, usize)> = crossword
        .neighbors(variable)
        .iter()
        .filter(|neighbor| !assignment.contains(neighbor))
        .filter_map(|neighbor| {
            crossword
                .overlap(variable, neighbor)
                .map(|(i, j)| (*neighbor, i, j))
        })
        .collect();

    // many candidates share the letter at a crossing, so count each (crossing, letter) once
    let mut eliminations: UnboundCache<(usize, char), usize> = UnboundCache::new();

    let mut scored: Vec<(usize, &str)> = Vec::with_capacity(domain.len());
    for word in domain {
        let mut cost = 0;
        for (crossing, (neighbor, index, neighbor_index)) in crossings.iter().enumerate() {
            cost += match letter_at(word, *index) {
                Some(letter) => *eliminations.cache_get_or_set_with((crossing, letter), || {
                    count_mismatches(domains, neighbor, *neighbor_index, letter)
                }),
                None => domains.remaining(neighbor),
            };
        }
        scored.push((cost, word.as_str()));
    }

    scored.sort_unstable();
    scored.into_iter().map(|(_, word)| word.to_owned()).collect()
}

/// Number of words of `variable` that do not have `letter` at `index`.
fn count_mismatches(domains: &Domains, variable: &Variable, index: usize, letter: char) -> usize {
    domains.get(variable).map_or(0, |domain| {
        domain
            .iter()
            .filter(|word| letter_at(word, index) != Some(letter))
            .count()
    })
}

#[cfg(test)]
mod tests {
    use super::{order_domain_values, select_unassigned_variable, VariableScore};
    use crate::{
        assignment::Assignment,
        crossword::{Crossword, Variable},
        domain::Domains,
    };
    use std::cmp::Ordering;
    use test_log::test;

    #[test]
    fn variable_score_ord_works() {
        let a = Variable::across(0, 0, 3);
        let b = Variable::down(0, 0, 3);

        assert_eq!(
            VariableScore {
                remaining: 2,
                degree: 0,
                variable: b
            }
            .cmp(&VariableScore {
                remaining: 5,
                degree: 4,
                variable: a
            }),
            Ordering::Less
        );

        assert_eq!(
            VariableScore {
                remaining: 5,
                degree: 1,
                variable: a
            }
            .cmp(&VariableScore {
                remaining: 5,
                degree: 4,
                variable: b
            }),
            Ordering::Greater
        );

        assert_eq!(
            VariableScore {
                remaining: 5,
                degree: 4,
                variable: a
            }
            .cmp(&VariableScore {
                remaining: 5,
                degree: 4,
                variable: b
            }),
            Ordering::Less
        );
    }

    #[test]
    fn select_prefers_fewest_remaining_values() {
        let long = Variable::across(0, 0, 4);
        let short = Variable::down(0, 0, 3);
        let crossword = Crossword::new(vec![long, short]).unwrap();
        let mut domains = Domains::new(&crossword, vec!["ABCD", "ABCE", "ABC"]);
        domains.enforce_node_consistency(&crossword);

        let mut assignment = Assignment::new();
        assert_eq!(
            Some(short),
            select_unassigned_variable(&crossword, &domains, &assignment)
        );

        assignment.insert(short, String::from("ABC"));
        assert_eq!(
            Some(long),
            select_unassigned_variable(&crossword, &domains, &assignment)
        );

        assignment.insert(long, String::from("ABCD"));
        assert_eq!(
            None,
            select_unassigned_variable(&crossword, &domains, &assignment)
        );
    }

    #[test]
    fn select_breaks_ties_by_degree() {
        // the down slot crosses both across slots
        let crossword = Crossword::from_grid(
            "
__*
*_*
__*
",
        )
        .unwrap();
        let down = Variable::down(0, 1, 3);
        assert_eq!(2, crossword.degree(&down));

        let mut domains = Domains::new(&crossword, vec!["AB", "CD", "EFG", "HIJ"]);
        domains.enforce_node_consistency(&crossword);

        assert_eq!(
            Some(down),
            select_unassigned_variable(&crossword, &domains, &Assignment::new())
        );
    }

    #[test]
    fn order_puts_least_constraining_first() {
        let x = Variable::across(1, 0, 3);
        let y = Variable::down(0, 1, 3);
        let crossword = Crossword::new(vec![x, y]).unwrap();
        // y's words have B, B, B, Q in the middle
        let mut domains = Domains::new(&crossword, vec!["ABC", "XBZ", "EBF", "PQR"]);
        domains.enforce_node_consistency(&crossword);

        let ordered = order_domain_values(&crossword, &domains, &x, &Assignment::new());

        assert_eq!(vec!["ABC", "EBF", "XBZ", "PQR"], ordered);
        // read-only
        assert_eq!(4, domains.remaining(&x));
        assert_eq!(4, domains.remaining(&y));
    }

    #[test]
    fn order_ignores_assigned_neighbors() {
        let x = Variable::across(1, 0, 3);
        let y = Variable::down(0, 1, 3);
        let crossword = Crossword::new(vec![x, y]).unwrap();
        let mut domains = Domains::new(&crossword, vec!["ABC", "XBZ", "EBF", "PQR"]);
        domains.enforce_node_consistency(&crossword);

        let mut assignment = Assignment::new();
        assignment.insert(y, String::from("PQR"));

        let ordered = order_domain_values(&crossword, &domains, &x, &assignment);

        assert_eq!(vec!["ABC", "EBF", "PQR", "XBZ"], ordered);
    }
}
