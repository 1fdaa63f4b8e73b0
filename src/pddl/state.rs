use std::collections::BTreeSet;
use super::action::Action;
use super::literal::Literal;

/// A world state used to replay plans. A literal holds only when it is in the set, so a
/// negative literal has to be produced by some effect first, the same as on the planning
/// graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State(pub BTreeSet<Literal>);

impl State {
    pub fn new<I: IntoIterator<Item = Literal>>(literals: I) -> State {
        State(literals.into_iter().collect())
    }

    pub fn holds(&self, literal: &Literal) -> bool {
        self.0.contains(literal)
    }

    pub fn satisfies<'a, I: IntoIterator<Item = &'a Literal>>(&self, goal: I) -> bool {
        goal.into_iter().all(|l| self.holds(l))
    }

    pub fn is_applicable(&self, action: &Action) -> bool {
        self.satisfies(&action.precondition)
    }

    /// Applies the effects of `action`; each effect replaces its opposite.
    pub fn apply(&mut self, action: &Action) {
        for effect in &action.effect {
            self.0.remove(&effect.negated());
            self.0.insert(effect.clone());
        }
    }
}
