use crate::crossword::{Crossword, Variable};
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

/// The `char` at `index` of `word`, or `None` if the word is too short.
pub(crate) fn letter_at(word: &str, index: usize) -> Option<char> {
    word.chars().nth(index)
}

pub(crate) fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Candidate words for every variable of a crossword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    domains: FxHashMap<Variable, FxHashSet<String>>,
}

impl Domains {
    /// Maps every variable of `crossword` to the full word list.
    pub fn new<I, S>(crossword: &Crossword, words: I) -> Domains
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: FxHashSet<String> = words.into_iter().map(Into::into).collect();

        Domains {
            domains: crossword
                .variables()
                .iter()
                .map(|variable| (*variable, words.clone()))
                .collect(),
        }
    }

    /// Removes every word whose length differs from its variable's length. Returns the number of
    /// words removed across all domains.
    pub fn enforce_node_consistency(&mut self, crossword: &Crossword) -> usize {
        let mut removed = 0;

        for variable in crossword.variables() {
            if let Some(domain) = self.domains.get_mut(variable) {
                let before = domain.len();
                domain.retain(|word| word_length(word) == variable.length);
                trace!(
                    "node consistency: {} keeps {} of {} words",
                    variable,
                    domain.len(),
                    before
                );
                removed += before - domain.len();
            }
        }

        debug!(
            "node consistency removed {} words, {} variables left empty",
            removed,
            self.domains.values().filter(|d| d.is_empty()).count()
        );
        removed
    }

    pub fn get(&self, variable: &Variable) -> Option<&FxHashSet<String>> {
        self.domains.get(variable)
    }

    pub(crate) fn get_mut(&mut self, variable: &Variable) -> Option<&mut FxHashSet<String>> {
        self.domains.get_mut(variable)
    }

    /// Number of candidates left for `variable`; zero for unknown variables.
    pub fn remaining(&self, variable: &Variable) -> usize {
        self.domains.get(variable).map_or(0, FxHashSet::len)
    }

    pub fn contains(&self, variable: &Variable, word: &str) -> bool {
        self.domains
            .get(variable)
            .map_or(false, |domain| domain.contains(word))
    }

    /// Total number of candidates across all variables.
    pub fn total(&self) -> usize {
        self.domains.values().map(FxHashSet::len).sum()
    }

    /// Whether some variable has no candidates left.
    pub fn any_empty(&self) -> bool {
        self.domains.values().any(FxHashSet::is_empty)
    }

    /// Narrows `variable` to the single candidate `word`. Returns false for unknown variables.
    pub(crate) fn pin(&mut self, variable: &Variable, word: &str) -> bool {
        match self.domains.get_mut(variable) {
            Some(domain) => {
                domain.clear();
                domain.insert(word.to_owned());
                true
            }
            None => false,
        }
    }

    /// Sorted candidates of `variable`, for deterministic iteration.
    pub fn sorted(&self, variable: &Variable) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .domains
            .get(variable)
            .map(|domain| domain.iter().map(String::as_str).collect())
            .unwrap_or_default();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::{letter_at, word_length, Domains};
    use crate::crossword::{Crossword, Variable};
    use test_log::test;

    fn crossword() -> Crossword {
        Crossword::from_grid(
            "
___
_**
_**
",
        )
        .unwrap()
    }

    #[test]
    fn new_gives_every_variable_the_full_list() {
        let crossword = crossword();
        let domains = Domains::new(&crossword, vec!["ab", "abc", "abc", "abcd"]);

        for variable in crossword.variables() {
            assert_eq!(3, domains.remaining(variable));
        }
        assert_eq!(6, domains.total());
    }

    #[test]
    fn node_consistency_filters_by_length() {
        let crossword = Crossword::new(vec![Variable::across(0, 0, 3), Variable::down(0, 5, 2)])
            .unwrap();
        let mut domains = Domains::new(&crossword, vec!["ab", "cat", "dog", "bird"]);

        let removed = domains.enforce_node_consistency(&crossword);

        assert_eq!(5, removed);
        assert_eq!(vec!["cat", "dog"], domains.sorted(&Variable::across(0, 0, 3)));
        assert_eq!(vec!["ab"], domains.sorted(&Variable::down(0, 5, 2)));
        assert!(!domains.any_empty());

        for variable in crossword.variables() {
            for word in domains.get(variable).unwrap() {
                assert_eq!(variable.length, word_length(word));
            }
        }
    }

    #[test]
    fn node_consistency_can_empty_a_domain() {
        let crossword = crossword();
        let mut domains = Domains::new(&crossword, vec!["toolong"]);

        domains.enforce_node_consistency(&crossword);

        assert!(domains.any_empty());
        assert_eq!(0, domains.total());
    }

    #[test]
    fn lengths_count_chars() {
        assert_eq!(3, word_length("été"));
        assert_eq!(Some('t'), letter_at("été", 1));
        assert_eq!(None, letter_at("été", 3));
    }

    #[test]
    fn pin_narrows_one_domain() {
        let crossword = crossword();
        let across = Variable::across(0, 0, 3);
        let down = Variable::down(0, 0, 3);
        let mut domains = Domains::new(&crossword, vec!["cat", "cot"]);

        assert!(domains.pin(&across, "cat"));

        assert_eq!(vec!["cat"], domains.sorted(&across));
        assert!(domains.contains(&across, "cat"));
        assert!(!domains.contains(&across, "cot"));
        assert!(domains.contains(&down, "cot"));
        assert_eq!(vec!["cat", "cot"], domains.sorted(&down));
        assert!(!domains.pin(&Variable::across(9, 9, 2), "xy"));
    }
}
