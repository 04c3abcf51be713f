use crate::{
    crossword::{Crossword, Variable},
    domain::{letter_at, word_length},
};
use rustc_hash::{FxHashMap, FxHashSet};

/// A partial mapping from variables to the words chosen for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: FxHashMap<Variable, String>,
}

impl Assignment {
    pub fn new() -> Assignment {
        Assignment::default()
    }

    pub fn insert(&mut self, variable: Variable, word: String) -> Option<String> {
        self.words.insert(variable, word)
    }

    pub fn remove(&mut self, variable: &Variable) -> Option<String> {
        self.words.remove(variable)
    }

    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.words.get(variable).map(String::as_str)
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.words.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.words.iter().map(|(variable, word)| (variable, word.as_str()))
    }

    /// Whether every variable of `crossword` has a word.
    pub fn is_complete(&self, crossword: &Crossword) -> bool {
        crossword.variables().iter().all(|v| self.contains(v))
    }

    /// Checks the whole assignment: words are pairwise distinct, each fits its variable's length,
    /// and every pair of assigned, overlapping variables agrees on the shared letter.
    pub fn is_consistent(&self, crossword: &Crossword) -> bool {
        let distinct: FxHashSet<&str> = self.words.values().map(String::as_str).collect();
        if distinct.len() != self.words.len() {
            return false;
        }

        if self
            .words
            .iter()
            .any(|(variable, word)| word_length(word) != variable.length)
        {
            return false;
        }

        self.words.iter().all(|(variable, word)| {
            crossword.neighbors(variable).iter().all(|neighbor| {
                match (self.get(neighbor), crossword.overlap(variable, neighbor)) {
                    (Some(other), Some((i, j))) => letter_at(word, i) == letter_at(other, j),
                    _ => true,
                }
            })
        })
    }

    /// Whether extending this assignment with `variable -> word` keeps it consistent, assuming it
    /// is consistent already.
    pub fn admits(&self, crossword: &Crossword, variable: &Variable, word: &str) -> bool {
        if word_length(word) != variable.length {
            return false;
        }

        if self
            .words
            .iter()
            .any(|(other_variable, other)| other_variable != variable && other == word)
        {
            return false;
        }

        crossword.neighbors(variable).iter().all(|neighbor| {
            match (self.get(neighbor), crossword.overlap(variable, neighbor)) {
                (Some(other), Some((i, j))) => letter_at(word, i) == letter_at(other, j),
                _ => true,
            }
        })
    }
}

impl FromIterator<(Variable, String)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, String)>>(iter: T) -> Assignment {
        Assignment {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Assignment;
    use crate::crossword::{Crossword, Variable};
    use test_log::test;

    fn crossing() -> (Crossword, Variable, Variable) {
        let x = Variable::across(1, 0, 3);
        let y = Variable::down(0, 1, 3);
        (Crossword::new(vec![x, y]).unwrap(), x, y)
    }

    #[test]
    fn insert_and_remove_work() {
        let (_, x, _) = crossing();
        let mut assignment = Assignment::new();

        assert!(assignment.is_empty());
        assert_eq!(None, assignment.insert(x, String::from("ABC")));
        assert_eq!(Some("ABC"), assignment.get(&x));
        assert_eq!(1, assignment.len());
        assert_eq!(Some(String::from("ABC")), assignment.remove(&x));
        assert!(!assignment.contains(&x));
    }

    #[test]
    fn is_complete_works() {
        let (crossword, x, y) = crossing();
        let mut assignment = Assignment::new();
        assignment.insert(x, String::from("ABC"));

        assert!(!assignment.is_complete(&crossword));

        assignment.insert(y, String::from("XBZ"));

        assert!(assignment.is_complete(&crossword));
    }

    #[test]
    fn is_consistent_checks_overlaps() {
        let (crossword, x, y) = crossing();

        let good: Assignment = vec![(x, String::from("ABC")), (y, String::from("XBZ"))]
            .into_iter()
            .collect();
        assert!(good.is_consistent(&crossword));

        let bad: Assignment = vec![(x, String::from("ABC")), (y, String::from("XYZ"))]
            .into_iter()
            .collect();
        assert!(!bad.is_consistent(&crossword));
    }

    #[test]
    fn is_consistent_checks_distinct_words_and_lengths() {
        let (crossword, x, y) = crossing();

        let repeated: Assignment = vec![(x, String::from("ABA")), (y, String::from("ABA"))]
            .into_iter()
            .collect();
        assert!(!repeated.is_consistent(&crossword));

        let too_long: Assignment = vec![(x, String::from("ABCD"))].into_iter().collect();
        assert!(!too_long.is_consistent(&crossword));

        assert!(Assignment::new().is_consistent(&crossword));
    }

    #[test]
    fn admits_matches_is_consistent() {
        let (crossword, x, y) = crossing();
        let mut assignment = Assignment::new();
        assignment.insert(x, String::from("ABC"));

        for word in ["XBZ", "XYZ", "ABC", "XB", "QBQ"] {
            let mut extended = assignment.clone();
            extended.insert(y, String::from(word));
            assert_eq!(
                extended.is_consistent(&crossword),
                assignment.admits(&crossword, &y, word),
                "{}",
                word
            );
        }
    }
}
