use std::fmt;
use std::collections::BTreeSet;
use super::action::Action;
use super::error::Error;
use super::expression::Expression;
use super::literal::Literal;
use super::state::State;

/// A grounded planning problem: what holds now, what must hold, and what can be done.
#[derive(Debug, Clone)]
pub struct Problem {
    pub initial_state: BTreeSet<Literal>,
    pub goal: BTreeSet<Literal>,
    pub actions: Vec<Action>,
}

impl Problem {
    pub fn new<I, G>(initial_state: I, goal: G, actions: Vec<Action>) -> Result<Problem, Error>
    where I: IntoIterator<Item = Literal>, G: IntoIterator<Item = Literal> {
        let initial_state: BTreeSet<Literal> = initial_state.into_iter().collect();
        let goal: BTreeSet<Literal> = goal.into_iter().collect();
        if let Some(l) = initial_state.iter().find(|l| !l.positive) {
            return Err(Error::NegativeInitialLiteral(l.clone()));
        }
        if let Some(l) = goal.iter().find(|l| l.positive && goal.contains(&l.negated())) {
            return Err(Error::ContradictoryGoal(l.clone(), l.negated()));
        }
        Ok(Problem { initial_state, goal, actions })
    }

    pub fn from_expressions(initial_state: &Expression, goal: &Expression, actions: Vec<Action>) -> Result<Problem, Error> {
        let initial_state = initial_state.conjuncts("initial state")?;
        let goal = goal.conjuncts("goal")?;
        Problem::new(initial_state, goal, actions)
    }

    pub fn initial(&self) -> State {
        State::new(self.initial_state.iter().cloned())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn join<'a, T: fmt::Display + 'a, I: Iterator<Item = &'a T>>(items: I) -> String {
            items.fold(String::new(), |acc, item| if acc.is_empty() { format!("{}", item) } else { acc + " ∧ " + &item.to_string() })
        }
        writeln!(f, "Init({})", join(self.initial_state.iter()))?;
        writeln!(f, "Goal({})", join(self.goal.iter()))?;
        for action in &self.actions {
            writeln!(f, "Action({},\n  PRECOND: {}\n  EFFECT: {})", action.name, join(action.precondition.iter()), join(action.effect.iter()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pddl::error::Error;
    use crate::pddl::expression::Expression;
    use crate::pddl::literal::Literal;
    use super::Problem;

    #[test]
    fn test_rejects_negative_init() {
        let err = Problem::new([Literal::negative("At", &["Home"])], Vec::<Literal>::new(), vec![]).unwrap_err();
        assert_eq!(err, Error::NegativeInitialLiteral(Literal::negative("At", &["Home"])));
    }

    #[test]
    fn test_rejects_contradictory_goal() {
        let at = Literal::positive("At", &["SFO"]);
        let err = Problem::new(Vec::<Literal>::new(), [at.clone(), at.negated()], vec![]).unwrap_err();
        assert_eq!(err, Error::ContradictoryGoal(at.clone(), at.negated()));
    }

    #[test]
    fn test_from_expressions() {
        let home = Expression::fact("At", &["Home"]);
        let sfo = Expression::fact("At", &["SFO"]);
        let problem = Problem::from_expressions(&home, &expAnd!(sfo), vec![]).unwrap();
        assert!(problem.initial().holds(&Literal::positive("At", &["Home"])));
        assert_eq!(problem.goal.len(), 1);
        assert!(Problem::from_expressions(&expOr!(home, sfo), &sfo, vec![]).is_err());
    }

    #[test]
    fn test_display() {
        let problem = Problem::new([Literal::positive("At", &["Home"])], [Literal::positive("At", &["SFO"])], vec![]).unwrap();
        assert_eq!(problem.to_string(), "Init(At(Home))\nGoal(At(SFO))\n");
    }
}
