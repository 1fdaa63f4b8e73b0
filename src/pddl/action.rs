use std::fmt;
use std::collections::BTreeSet;
use super::error::Error;
use super::expression::Expression;
use super::literal::Literal;

/// A grounded STRIPS action.
///
/// No-ops are synthesized by the planning graph to carry a single literal from one level
/// to the next; they never appear in a plan handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    pub name: String,
    pub precondition: BTreeSet<Literal>,
    pub effect: BTreeSet<Literal>,
    no_op: bool,
}

impl Action {
    /// Builds an action from upstream expressions, which must be flat conjunctions.
    pub fn new(name: &str, precondition: &Expression, effect: &Expression) -> Result<Action, Error> {
        let precondition = precondition.conjuncts(&format!("precondition of {}", name))?;
        let effect = effect.conjuncts(&format!("effect of {}", name))?;
        Ok(Action::from_literals(name, precondition, effect))
    }

    pub fn from_literals<P, E>(name: &str, precondition: P, effect: E) -> Action
    where P: IntoIterator<Item = Literal>, E: IntoIterator<Item = Literal> {
        Action {
            name: name.to_string(),
            precondition: precondition.into_iter().collect(),
            effect: effect.into_iter().collect(),
            no_op: false,
        }
    }

    pub fn no_op(literal: &Literal) -> Action {
        Action {
            name: format!("NoOp[{}]", literal),
            precondition: BTreeSet::from([literal.clone()]),
            effect: BTreeSet::from([literal.clone()]),
            no_op: true,
        }
    }

    #[inline]
    pub fn is_no_op(&self) -> bool {
        self.no_op
    }

    pub fn is_applicable(&self, literals: &BTreeSet<Literal>) -> bool {
        self.precondition.is_subset(literals)
    }

    pub fn achieves(&self, literal: &Literal) -> bool {
        self.effect.contains(literal)
    }

    /// Some effect of `self` negates some effect of `other`.
    pub fn has_inconsistent_effects(&self, other: &Action) -> bool {
        self.effect.iter().any(|e1| other.effect.iter().any(|e2| e1.is_opposed(e2)))
    }

    /// Some effect of either action negates a precondition of the other.
    pub fn interferes_with(&self, other: &Action) -> bool {
        fn undoes(a: &Action, b: &Action) -> bool {
            a.effect.iter().any(|e| b.precondition.iter().any(|p| e.is_opposed(p)))
        }
        undoes(self, other) || undoes(other, self)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
