use std::fmt;
use super::utils::build_arg_string;

/// A ground proposition together with its polarity.
///
/// Literals order by predicate, then arguments, then polarity, so sets of
/// literals iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub predicate: String,
    pub args: Vec<String>,
    pub positive: bool,
}

impl Literal {
    pub fn new(predicate: &str, args: &[&str], positive: bool) -> Literal {
        Literal {
            predicate: predicate.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            positive,
        }
    }

    pub fn positive(predicate: &str, args: &[&str]) -> Literal {
        Literal::new(predicate, args, true)
    }

    pub fn negative(predicate: &str, args: &[&str]) -> Literal {
        Literal::new(predicate, args, false)
    }

    /// The same proposition with the opposite polarity.
    pub fn negated(&self) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self.args.clone(),
            positive: !self.positive,
        }
    }

    /// True when both literals talk about the same proposition with different polarity.
    pub fn is_opposed(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.predicate == other.predicate && self.args == other.args
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.positive {
            write!(f, "¬")?;
        }
        if self.args.is_empty() {
            write!(f, "{}", self.predicate)
        } else {
            write!(f, "{}({})", self.predicate, build_arg_string(&self.args))
        }
    }
}
