use std::fmt;
use std::collections::BTreeSet;
use super::error::Error;
use super::literal::Literal;

/// Upstream logical form of preconditions, effects, initial states and goals.
///
/// GraphPlan only understands flat conjunctions of literals; [`Expression::conjuncts`]
/// performs that conversion and rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Not(Box<Expression>),
    Fact(Literal)
}

#[macro_export]
macro_rules! expNot{
    ( $e: expr ) => {
        $crate::pddl::expression::Expression::Not(Box::new($e.clone()))
    };
}

#[macro_export]
macro_rules! expAnd {
    ( $($e: expr), * ) => {
        {
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($e.clone());
            )*
            $crate::pddl::expression::Expression::And(temp_vec)
        }
    };
}

#[macro_export]
macro_rules! expOr {
    ( $($e: expr), * ) => {
        {
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($e.clone());
            )*
            $crate::pddl::expression::Expression::Or(temp_vec)
        }
    };
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Or(v) => { write!(f, "(or")?; v.iter().try_for_each(|item| write!(f, " {}", item))?; write!(f, ")")},
            Expression::And(v) => { write!(f, "(and")?; v.iter().try_for_each(|item| write!(f, " {}", item))?; write!(f, ")")},
            Expression::Not(item) => write!(f, "(not {})", item),
            Expression::Fact(l) => write!(f, "{}", l)
        }
    }
}

impl From<Literal> for Expression {
    fn from(l: Literal) -> Self {
        Expression::Fact(l)
    }
}

impl Expression {
    pub fn fact(predicate: &str, args: &[&str]) -> Expression {
        Expression::Fact(Literal::positive(predicate, args))
    }

    /// Flattens the expression into the set of literals it conjoins.
    ///
    /// Unit disjunctions and double negations are unwrapped; any real disjunction, an empty
    /// disjunction or a negated compound is reported as [`Error::NotConjunctive`] with `context`.
    pub fn conjuncts(&self, context: &str) -> Result<BTreeSet<Literal>, Error> {
        fn rec_collect(e: &Expression, context: &str, set: &mut BTreeSet<Literal>) -> Result<(), Error> {
            match e {
                Expression::And(v) => v.iter().try_for_each(|e| rec_collect(e, context, set)),
                Expression::Or(v) if v.len() == 1 => rec_collect(&v[0], context, set),
                Expression::Fact(l) => { set.insert(l.clone()); Ok(()) },
                Expression::Not(inner) => match inner.as_ref() {
                    Expression::Fact(l) => { set.insert(l.negated()); Ok(()) },
                    Expression::Not(e) => rec_collect(e, context, set),
                    Expression::Or(v) if v.len() == 1 => rec_collect(&Expression::Not(Box::new(v[0].clone())), context, set),
                    _ => Err(Error::NotConjunctive { context: context.to_owned(), found: e.to_string() }),
                },
                Expression::Or(_) => Err(Error::NotConjunctive { context: context.to_owned(), found: e.to_string() }),
            }
        }
        let mut literal_set = BTreeSet::new();
        rec_collect(self, context, &mut literal_set)?;
        Ok(literal_set)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use crate::pddl::error::Error;
    use crate::pddl::literal::Literal;
    use super::Expression;

    #[test]
    fn test_flat_conjunction() {
        let tire = Expression::fact("Tire", &["Spare"]);
        let at = Expression::fact("At", &["Spare", "Ground"]);
        let flat = Expression::fact("At", &["Flat", "Axle"]);
        let e = expAnd!(tire, at, expNot!(flat));
        let literals = e.conjuncts("test").unwrap();
        assert_eq!(literals, BTreeSet::from([
            Literal::positive("Tire", &["Spare"]),
            Literal::positive("At", &["Spare", "Ground"]),
            Literal::negative("At", &["Flat", "Axle"]),
        ]));
    }

    #[test]
    fn test_nested_and_unit_clauses() {
        let a = Expression::fact("A", &[]);
        let b = Expression::fact("B", &[]);
        let e = expAnd!(expAnd!(a), expOr!(expNot!(expNot!(b))), expNot!(expOr!(a)));
        let literals = e.conjuncts("test").unwrap();
        assert_eq!(literals, BTreeSet::from([
            Literal::positive("A", &[]),
            Literal::negative("A", &[]),
            Literal::positive("B", &[]),
        ]));
        assert_eq!(Expression::And(vec![]).conjuncts("test").unwrap(), BTreeSet::new());
    }

    #[test]
    fn test_disjunction_rejected() {
        let a = Expression::fact("A", &[]);
        let b = Expression::fact("B", &[]);
        let e = expAnd!(a, expOr!(a, b));
        assert_eq!(e.conjuncts("effect of X"), Err(Error::NotConjunctive {
            context: "effect of X".to_owned(),
            found: "(or A B)".to_owned(),
        }));
        assert!(Expression::Or(vec![]).conjuncts("goal").is_err());
        assert!(expNot!(expAnd!(a, b)).conjuncts("goal").is_err());
    }

    #[test]
    fn test_display() {
        let a = Expression::fact("At", &["Home"]);
        let b = Expression::fact("At", &["SFO"]);
        assert_eq!(expAnd!(a, expNot!(b)).to_string(), "(and At(Home) (not At(SFO)))");
    }
}
