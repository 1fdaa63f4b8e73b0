use std::collections::BTreeSet;
use std::fmt;
use log::{debug, info};
use crate::pddl::action::Action;
use crate::pddl::literal::Literal;
use crate::pddl::problem::Problem;
use super::extractor::{BackwardExtractor, SolutionExtractor, Steps};
use super::graph::PlanningGraph;
use super::nogoods::NoGoods;

/// Knobs of the planner. The defaults reproduce textbook GraphPlan with the level-cost
/// heuristic switched on.
#[derive(Debug, Clone)]
pub struct GraphPlanConfig {
    /// Try the level-cost guided action choice before enumerating subsets (default: true)
    pub heuristic: bool,
    /// Log a warning when a level with more actions than this is enumerated (default: 20)
    pub exhaustive_warn_threshold: usize,
}

impl Default for GraphPlanConfig {
    fn default() -> Self {
        Self {
            heuristic: true,
            exhaustive_warn_threshold: 20,
        }
    }
}

impl GraphPlanConfig {
    pub fn with_heuristic(mut self, heuristic: bool) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_exhaustive_warn_threshold(mut self, threshold: usize) -> Self {
        self.exhaustive_warn_threshold = threshold;
        self
    }
}

/// A solution: user actions grouped by the graph level they were taken from, earliest first.
/// Actions in one step are pairwise non-mutex and can run in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<Vec<Action>>,
}

impl Plan {
    fn from_steps(steps: Steps) -> Plan {
        let steps = steps.into_iter()
            .map(|step| step.into_iter().filter(|a| !a.is_no_op()).collect::<Vec<_>>())
            .filter(|step| !step.is_empty())
            .collect();
        Plan { steps }
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.steps.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.steps.iter().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.steps.into_iter().flatten().collect()
    }

    /// Replays the plan from the initial state, checking every precondition on the way,
    /// and checks that the goal holds at the end. A negative precondition or goal only holds
    /// once an earlier action has asserted it.
    pub fn validate(&self, problem: &Problem) -> bool {
        let mut state = problem.initial();
        for action in self.actions() {
            if !state.is_applicable(action) {
                debug!("{} is not applicable in {:?}", action, state);
                return false
            }
            state.apply(action);
        }
        state.satisfies(&problem.goal)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, action) in self.actions().enumerate() {
            writeln!(f, "{}. {}", i + 1, action)?;
        }
        Ok(())
    }
}

/// Everything the driver built while looking for a plan.
#[derive(Debug)]
pub struct Solution {
    pub plan: Option<Plan>,
    pub graph: PlanningGraph,
    pub nogoods: NoGoods,
}

/// Both the graph and the nogoods for `goals` have reached a fixed point.
pub fn leveled_off(graph: &PlanningGraph, nogoods: &NoGoods, goals: &BTreeSet<Literal>) -> bool {
    graph.has_leveled_off() && nogoods.leveled_off(graph.max_level(), goals)
}

/// The GraphPlan driver: expand the graph until the goals show up non-mutex, try to extract
/// a plan, and give up once nothing can change any more.
pub struct GraphPlan<E: SolutionExtractor = BackwardExtractor> {
    extractor: E,
}

impl GraphPlan {
    pub fn new(config: GraphPlanConfig) -> Self {
        GraphPlan { extractor: BackwardExtractor::new(&config) }
    }
}

impl<E: SolutionExtractor> GraphPlan<E> {
    pub fn with_extractor(extractor: E) -> Self {
        GraphPlan { extractor }
    }

    pub fn plan(&self, problem: &Problem) -> Option<Plan> {
        self.solve(problem).plan
    }

    pub fn solve(&self, problem: &Problem) -> Solution {
        let goals = &problem.goal;
        let mut graph = PlanningGraph::new(problem.initial_state.iter().cloned());
        let mut nogoods = NoGoods::new();
        loop {
            let t = graph.max_level();
            let goals_non_mutex = graph.all_goals_non_mutex(goals, t);
            if goals_non_mutex {
                if let Some(steps) = self.extractor.extract(&graph, goals, t, &mut nogoods) {
                    let plan = Plan::from_steps(steps);
                    info!("found a plan of {} actions on level {}", plan.len(), t);
                    return Solution { plan: Some(plan), graph, nogoods }
                }
            }
            if leveled_off(&graph, &nogoods, goals) {
                info!("graph and nogoods leveled off on level {}, no plan exists", t);
                return Solution { plan: None, graph, nogoods }
            }
            if !goals_non_mutex && graph.has_leveled_off() {
                info!("graph leveled off on level {} without the goals being reachable together", t);
                return Solution { plan: None, graph, nogoods }
            }
            graph.expand(&problem.actions);
        }
    }
}
