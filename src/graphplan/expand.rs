use std::fmt;
use log::{debug, trace};
use crate::pddl::action::Action;
use super::graph::{Level, PlanningGraph};
use super::node::NodeId;

/// Why two nodes of one level were declared mutex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutexReason {
    InconsistentEffects,
    Interference,
    CompetingNeeds,
    Negation,
    InconsistentSupport,
}

impl fmt::Display for MutexReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MutexReason::InconsistentEffects => write!(f, "inconsistent effects"),
            MutexReason::Interference => write!(f, "interference"),
            MutexReason::CompetingNeeds => write!(f, "competing needs"),
            MutexReason::Negation => write!(f, "negation"),
            MutexReason::InconsistentSupport => write!(f, "inconsistent support"),
        }
    }
}

impl PlanningGraph {
    /// Grows the graph by one action level and the state level it produces.
    pub fn expand(&mut self, actions: &[Action]) {
        let t = self.max_level();
        self.add_action_level(actions, t);
        self.add_state_level(t);
        debug!("expanded to S{}: {} actions on A{} ({} mutex), {} literals ({} mutex)",
            t + 1, self.action_nodes(t).len(), t, self.action_mutex_count(t),
            self.state_nodes(t + 1).len(), self.state_mutex_count(t + 1));
    }

    fn add_action_level(&mut self, actions: &[Action], t: usize) {
        let current = self.literals(t);
        let no_ops: Vec<Action> = current.iter().map(Action::no_op).collect();
        let mut new_actions = Vec::new();
        for action in actions.iter().chain(no_ops.iter()) {
            if action.is_applicable(&current) {
                if let Some(id) = self.add_action(t, action.clone()) {
                    new_actions.push(id);
                }
            }
        }

        for (i, &a1) in new_actions.iter().enumerate() {
            for &a2 in &new_actions[i + 1..] {
                if let Some(reason) = self.action_mutex(a1, a2) {
                    trace!("mutex {} / {}: {}", self.node(a1), self.node(a2), reason);
                    self.set_mutex(a1, a2);
                }
            }
        }
    }

    /// First matching rule, checked in the order inconsistent effects, interference,
    /// competing needs.
    fn action_mutex(&self, a1: NodeId, a2: NodeId) -> Option<MutexReason> {
        let (x, y) = match (self.node(a1).action(), self.node(a2).action()) {
            (Some(x), Some(y)) => (x, y),
            _ => return None,
        };
        if x.has_inconsistent_effects(y) {
            return Some(MutexReason::InconsistentEffects)
        }
        if x.interferes_with(y) {
            return Some(MutexReason::Interference)
        }
        let competing = self.preconditions(a1).iter()
            .any(|&p1| self.preconditions(a2).iter().any(|&p2| p1 != p2 && self.is_mutex(p1, p2)));
        if competing {
            return Some(MutexReason::CompetingNeeds)
        }
        None
    }

    fn add_state_level(&mut self, t: usize) {
        self.levels.push(Level::default());
        let next = t + 1;
        let producers = self.action_nodes(t).to_vec();
        for a in producers {
            let effects = match self.node(a).action() {
                Some(action) => action.effect.clone(),
                None => continue,
            };
            for effect in effects {
                let s = self.add_state(next, effect);
                self.add_support(s, a);
            }
        }

        let states = self.state_nodes(next).to_vec();
        for (i, &s1) in states.iter().enumerate() {
            for &s2 in &states[i + 1..] {
                if let Some(reason) = self.literal_mutex(s1, s2) {
                    trace!("mutex {} / {}: {}", self.node(s1), self.node(s2), reason);
                    self.set_mutex(s1, s2);
                }
            }
        }
    }

    /// Opposed literals, or no pair of supporters that can run together. A shared supporter
    /// counts as a compatible pair; a literal without supporters is inconsistently supported.
    fn literal_mutex(&self, s1: NodeId, s2: NodeId) -> Option<MutexReason> {
        let (l1, l2) = match (self.node(s1).literal(), self.node(s2).literal()) {
            (Some(l1), Some(l2)) => (l1, l2),
            _ => return None,
        };
        if l1.is_opposed(l2) {
            return Some(MutexReason::Negation)
        }
        let level = self.node(s1).level();
        let support1 = self.supporters(level, l1);
        let support2 = self.supporters(level, l2);
        let consistent = support1.iter()
            .any(|&a1| support2.iter().any(|&a2| a1 == a2 || !self.is_mutex(a1, a2)));
        if consistent {
            None
        } else {
            Some(MutexReason::InconsistentSupport)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use test_log::test;
    use crate::pddl::action::Action;
    use crate::pddl::literal::Literal;
    use crate::graphplan::graph::PlanningGraph;

    fn have() -> Literal { Literal::positive("Have", &["Cake"]) }
    fn eaten() -> Literal { Literal::positive("Eaten", &["Cake"]) }

    fn cake_actions() -> Vec<Action> {
        vec![
            Action::from_literals("Eat(Cake)", [have()], [have().negated(), eaten()]),
            Action::from_literals("Bake(Cake)", [have().negated()], [have()]),
        ]
    }

    fn action_id(graph: &PlanningGraph, level: usize, name: &str) -> usize {
        *graph.action_nodes(level).iter()
            .find(|&&id| graph.node(id).action().map_or(false, |a| a.name == name))
            .unwrap()
    }

    #[test]
    fn test_first_expansion() {
        let actions = cake_actions();
        let mut graph = PlanningGraph::new([have()]);
        graph.expand(&actions);
        assert_eq!(graph.max_level(), 1);
        // Bake needs ¬Have(Cake), which is not on S0
        let names: Vec<&str> = graph.actions(0).map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Eat(Cake)", "NoOp[Have(Cake)]"]);
        assert_eq!(graph.literals(1), BTreeSet::from([have(), have().negated(), eaten()]));

        let eat = action_id(&graph, 0, "Eat(Cake)");
        let keep = action_id(&graph, 0, "NoOp[Have(Cake)]");
        assert!(graph.is_mutex(eat, keep));

        let s = |l: &Literal| graph.find_state(1, l).unwrap();
        assert!(graph.is_mutex(s(&have()), s(&have().negated())));
        assert!(graph.is_mutex(s(&have()), s(&eaten())));
        // both produced by Eat
        assert!(!graph.is_mutex(s(&have().negated()), s(&eaten())));
    }

    #[test]
    fn test_second_expansion_relaxes_mutex() {
        let actions = cake_actions();
        let mut graph = PlanningGraph::new([have()]);
        graph.expand(&actions);
        graph.expand(&actions);
        assert_eq!(graph.max_level(), 2);
        assert_eq!(graph.action_nodes(1).len(), 5);

        let bake = action_id(&graph, 1, "Bake(Cake)");
        let eat = action_id(&graph, 1, "Eat(Cake)");
        let keep_eaten = action_id(&graph, 1, "NoOp[Eaten(Cake)]");
        let keep_have = action_id(&graph, 1, "NoOp[Have(Cake)]");
        assert!(graph.is_mutex(eat, bake));
        assert!(!graph.is_mutex(bake, keep_eaten));
        // Have(Cake) and Eaten(Cake) are mutex on S1
        assert!(graph.is_mutex(keep_have, keep_eaten));

        let goals = BTreeSet::from([have(), eaten()]);
        assert!(!graph.all_goals_non_mutex(&goals, 1));
        assert!(graph.all_goals_non_mutex(&goals, 2));
    }

    #[test]
    fn test_expansion_is_monotone_and_symmetric() {
        let actions = cake_actions();
        let mut graph = PlanningGraph::new([have()]);
        for _ in 0..4 {
            graph.expand(&actions);
        }
        for t in 0..graph.max_level() {
            assert!(graph.literals(t).is_subset(&graph.literals(t + 1)));
        }
        for t in 0..=graph.max_level() {
            for &a in graph.state_nodes(t) {
                for &b in graph.state_nodes(t) {
                    assert_eq!(graph.is_mutex(a, b), graph.is_mutex(b, a));
                }
                for &b in graph.state_nodes(t + 1) {
                    assert!(!graph.is_mutex(a, b));
                }
            }
        }
        assert!(graph.has_leveled_off());
    }

    #[test]
    fn test_competing_needs() {
        // Both actions are harmless to each other, only their preconditions clash.
        let p = Literal::positive("P", &[]);
        let q = Literal::positive("Q", &[]);
        let actions = vec![
            Action::from_literals("MakeQ", [p.negated()], [q.clone()]),
            Action::from_literals("UseP", [p.clone()], [Literal::positive("R", &[])]),
            Action::from_literals("MakeNotP", [p.clone()], [p.negated()]),
        ];
        let mut graph = PlanningGraph::new([p.clone()]);
        graph.expand(&actions);
        graph.expand(&actions);
        let make_q = action_id(&graph, 1, "MakeQ");
        let use_p = action_id(&graph, 1, "UseP");
        assert!(graph.is_mutex(make_q, use_p));
    }

    #[test]
    fn test_leveling_off_waits_for_mutex_relaxation() {
        let lit = |p: &str| Literal::positive(p, &[]);
        let actions = vec![
            Action::from_literals("X", [lit("Q")], [lit("S")]),
            Action::from_literals("Y", [lit("S")], [lit("Q"), lit("R"), lit("T").negated()]),
            Action::from_literals("Z", Vec::new(), [lit("R").negated(), lit("S").negated()]),
        ];
        let mut graph = PlanningGraph::new([lit("S")]);
        for _ in 0..3 {
            graph.expand(&actions);
        }
        // literals and actions are already stable, mutexes are still relaxing
        assert_eq!(graph.literals(3), graph.literals(2));
        assert_eq!(graph.literals(2), graph.literals(1));
        assert_eq!(graph.state_mutex_count(1), 8);
        assert_eq!(graph.state_mutex_count(2), 4);
        assert_eq!(graph.state_mutex_count(3), 3);
        assert!(!graph.has_leveled_off());

        graph.expand(&actions);
        assert_eq!(graph.state_mutex_count(4), 3);
        assert!(graph.has_leveled_off());
    }
}
