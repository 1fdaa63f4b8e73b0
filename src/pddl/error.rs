use super::literal::Literal;

/// Malformed problem input. Planning failure is never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An expression that should be a flat conjunction of literals is not one.
    /// Carries where it was found (e.g. `precondition of Remove(Flat, Axle)`) and the offending part.
    NotConjunctive { context: String, found: String },
    NegativeInitialLiteral(Literal),
    ContradictoryGoal(Literal, Literal),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConjunctive { context, found } => {
                write!(f, "{}: expected a conjunction of literals, found {}", context, found)
            }
            Self::NegativeInitialLiteral(l) => write!(f, "initial state may only hold positive literals, found {}", l),
            Self::ContradictoryGoal(l1, l2) => write!(f, "goal requires both {} and {}", l1, l2),
        }
    }
}

impl std::error::Error for Error {}
