use crate::{
    arc::enforce_arc_consistency,
    assignment::Assignment,
    crossword::{Crossword, Variable},
    domain::Domains,
    fill::{FillConfig, FillOutcome, Filler, Statistics},
    order::{order_domain_values, select_unassigned_variable},
};
use log::{debug, trace};
use std::time::Instant;

/// Depth-first search over assignments, run after node and arc consistency have pruned the
/// domains.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingFiller {
    config: FillConfig,
    statistics: Statistics,
}

impl BacktrackingFiller {
    pub fn new(config: FillConfig) -> BacktrackingFiller {
        BacktrackingFiller {
            config,
            statistics: Statistics::default(),
        }
    }

    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Counters from the last call to `fill`.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn run(&mut self, crossword: &Crossword, mut domains: Domains) -> FillOutcome {
        self.statistics.node_consistency_pruned = domains.enforce_node_consistency(crossword);
        if domains.any_empty() {
            debug!("some variable has no word of the right length");
            return FillOutcome::Unsatisfiable;
        }

        let before = domains.total();
        let consistent = enforce_arc_consistency(crossword, &mut domains, None);
        self.statistics.arc_consistency_pruned = before - domains.total();
        if !consistent {
            return FillOutcome::Unsatisfiable;
        }
        debug!(
            "arc consistency pruned {} words, {} candidates left for {} variables",
            self.statistics.arc_consistency_pruned,
            domains.total(),
            crossword.len()
        );

        let mut search = Search {
            crossword,
            domains,
            assignment: Assignment::new(),
            config: &self.config,
            statistics: &mut self.statistics,
        };

        match search.backtrack() {
            Step::Solved => FillOutcome::Solved(search.assignment),
            Step::Failed => FillOutcome::Unsatisfiable,
            Step::OutOfBudget => FillOutcome::BudgetExhausted,
        }
    }
}

impl Filler for BacktrackingFiller {
    fn fill<I, S>(&mut self, crossword: &Crossword, words: I) -> FillOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = Instant::now();
        self.statistics = Statistics::default();

        let outcome = self.run(crossword, Domains::new(crossword, words));

        self.statistics.total_time = start.elapsed();
        debug!(
            "fill finished as {} after {} states and {} backtracks in {:?}",
            match outcome {
                FillOutcome::Solved(_) => "solved",
                FillOutcome::Unsatisfiable => "unsatisfiable",
                FillOutcome::BudgetExhausted => "out of budget",
            },
            self.statistics.states,
            self.statistics.backtracks,
            self.statistics.total_time
        );
        outcome
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Step {
    Solved,
    Failed,
    OutOfBudget,
}

/// Live state of one search. The assignment only grows through `backtrack`, which removes every
/// word it adds unless the search succeeds.
struct Search<'s> {
    crossword: &'s Crossword,
    domains: Domains,
    assignment: Assignment,
    config: &'s FillConfig,
    statistics: &'s mut Statistics,
}

impl<'s> Search<'s> {
    fn backtrack(&mut self) -> Step {
        if self.assignment.len() == self.crossword.len() {
            return Step::Solved;
        }

        if let Some(max_states) = self.config.max_states {
            if self.statistics.states >= max_states {
                return Step::OutOfBudget;
            }
        }
        self.statistics.states += 1;

        let variable =
            match select_unassigned_variable(self.crossword, &self.domains, &self.assignment) {
                Some(variable) => variable,
                None => return Step::Solved,
            };

        let candidates = if self.config.least_constraining_value {
            order_domain_values(self.crossword, &self.domains, &variable, &self.assignment)
        } else {
            self.domains
                .sorted(&variable)
                .into_iter()
                .map(str::to_owned)
                .collect()
        };

        for word in candidates {
            if !self.assignment.admits(self.crossword, &variable, &word) {
                continue;
            }

            trace!("trying {} = {}", variable, word);
            self.assignment.insert(variable, word.clone());

            let step = if self.config.inference {
                self.infer_and_backtrack(&variable, &word)
            } else {
                self.backtrack()
            };

            match step {
                Step::Solved => return Step::Solved,
                Step::OutOfBudget => {
                    self.assignment.remove(&variable);
                    return Step::OutOfBudget;
                }
                Step::Failed => {
                    self.assignment.remove(&variable);
                    self.statistics.backtracks += 1;
                }
            }
        }

        Step::Failed
    }

    /// Pins `variable` to `word`, propagates, and recurses. Domains are restored on every path.
    fn infer_and_backtrack(&mut self, variable: &Variable, word: &str) -> Step {
        let snapshot = self.domains.clone();
        self.domains.pin(variable, word);

        let arcs = self
            .crossword
            .neighbors(variable)
            .iter()
            .map(|neighbor| (*neighbor, *variable))
            .collect();

        let step = if enforce_arc_consistency(self.crossword, &mut self.domains, Some(arcs)) {
            self.backtrack()
        } else {
            Step::Failed
        };

        self.domains = snapshot;
        step
    }
}
