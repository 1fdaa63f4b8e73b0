use std::collections::{BTreeSet, HashMap, HashSet};
use crate::pddl::literal::Literal;

/// Goal sets already proven unreachable from a given level.
///
/// The graph below any level never changes once the next level exists, so an entry stays
/// valid for the rest of the search.
#[derive(Debug, Clone, Default)]
pub struct NoGoods(HashMap<usize, HashSet<BTreeSet<Literal>>>);

impl NoGoods {
    pub fn new() -> Self {
        NoGoods(HashMap::new())
    }

    pub fn contains(&self, level: usize, goals: &BTreeSet<Literal>) -> bool {
        self.0.get(&level).map_or(false, |sets| sets.contains(goals))
    }

    /// Returns `false` if the pair was already known.
    pub fn insert(&mut self, level: usize, goals: BTreeSet<Literal>) -> bool {
        self.0.entry(level).or_default().insert(goals)
    }

    pub fn len(&self) -> usize {
        self.0.values().map(|sets| sets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The same goals failed from both `max_level` and the level right before it.
    pub fn leveled_off(&self, max_level: usize, goals: &BTreeSet<Literal>) -> bool {
        max_level >= 1 && self.contains(max_level, goals) && self.contains(max_level - 1, goals)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use crate::pddl::literal::Literal;
    use super::NoGoods;

    #[test]
    fn test_set_equality() {
        let a = Literal::positive("A", &[]);
        let b = Literal::positive("B", &[]);
        let mut nogoods = NoGoods::new();
        assert!(nogoods.is_empty());
        assert!(nogoods.insert(2, BTreeSet::from([a.clone(), b.clone()])));
        assert!(!nogoods.insert(2, BTreeSet::from([b.clone(), a.clone()])));
        assert!(nogoods.contains(2, &BTreeSet::from([b.clone(), a.clone()])));
        assert!(!nogoods.contains(1, &BTreeSet::from([a.clone(), b.clone()])));
        assert!(!nogoods.contains(2, &BTreeSet::from([a.clone()])));
        assert_eq!(nogoods.len(), 1);
    }

    #[test]
    fn test_leveled_off() {
        let goals = BTreeSet::from([Literal::positive("A", &[])]);
        let mut nogoods = NoGoods::new();
        nogoods.insert(3, goals.clone());
        assert!(!nogoods.leveled_off(3, &goals));
        nogoods.insert(2, goals.clone());
        assert!(nogoods.leveled_off(3, &goals));
        assert!(nogoods.leveled_off(3, &goals));
        assert!(!nogoods.leveled_off(4, &goals));
        assert!(!nogoods.leveled_off(0, &goals));
    }
}
