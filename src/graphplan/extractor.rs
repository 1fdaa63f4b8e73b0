//! Backward search for a plan inside a planning graph.
//!
//! Starting from the goals on some state level, each step picks a set of pairwise non-mutex
//! actions one level down whose effects cover the goals, then continues with the union of
//! their preconditions. Goal sets that cannot be reached from a level are remembered as
//! nogoods.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use log::{debug, trace, warn};
use priority_queue::PriorityQueue;
use crate::pddl::action::Action;
use crate::pddl::literal::Literal;
use super::graph::PlanningGraph;
use super::node::NodeId;
use super::nogoods::NoGoods;
use super::planner::GraphPlanConfig;
use super::subsets::{Subset, Subsets};

/// Actions chosen per action level, earliest level first. No-ops are included.
pub type Steps = Vec<Vec<Action>>;

pub trait SolutionExtractor {
    /// Looks for actions achieving `goals` on state level `level`. Records failures in `nogoods`.
    fn extract(&self, graph: &PlanningGraph, goals: &BTreeSet<Literal>, level: usize, nogoods: &mut NoGoods) -> Option<Steps>;
}

/// Tries a level-cost guided choice first, then every subset of the level's actions.
#[derive(Debug, Clone)]
pub struct BackwardExtractor {
    heuristic: bool,
    warn_threshold: usize,
}

impl Default for BackwardExtractor {
    fn default() -> Self {
        BackwardExtractor::new(&GraphPlanConfig::default())
    }
}

impl BackwardExtractor {
    pub fn new(config: &GraphPlanConfig) -> Self {
        BackwardExtractor { heuristic: config.heuristic, warn_threshold: config.exhaustive_warn_threshold }
    }

    /// For every goal, hardest first, the supporter whose preconditions appear earliest.
    /// `None` when some goal has no supporter at all.
    fn heuristic_choice(&self, graph: &PlanningGraph, goals: &BTreeSet<Literal>, level: usize) -> Option<Subset> {
        let actions = graph.action_nodes(level - 1);
        let cost = |l: &Literal| graph.level_cost(l).unwrap_or_else(|| graph.max_level());

        let mut queue = PriorityQueue::new();
        for goal in goals {
            queue.push(goal, (cost(goal), Reverse(goal)));
        }

        let mut chosen = Vec::with_capacity(goals.len());
        while let Some((goal, _)) = queue.pop() {
            let best = graph.supporters(level, goal).iter()
                .copied()
                .min_by_key(|&a| graph.node(a).action().map_or(0, |a| a.precondition.iter().map(|p| cost(p)).sum::<usize>()))?;
            chosen.push(actions.iter().position(|&a| a == best)?);
        }
        Some(Subset::from_indices(actions.len(), chosen))
    }

    /// Pairwise non-mutex and jointly producing every goal.
    fn is_valid(&self, graph: &PlanningGraph, chosen: &[NodeId], goals: &BTreeSet<Literal>) -> bool {
        let non_mutex = chosen.iter().enumerate()
            .all(|(i, &a)| chosen[i + 1..].iter().all(|&b| !graph.is_mutex(a, b)));
        non_mutex && goals.iter().all(|g| {
            chosen.iter().any(|&a| graph.node(a).action().map_or(false, |action| action.achieves(g)))
        })
    }

    fn try_candidate(&self, graph: &PlanningGraph, chosen: &[NodeId], level: usize, nogoods: &mut NoGoods) -> Option<Steps> {
        let step: Vec<Action> = chosen.iter().filter_map(|&a| graph.node(a).action()).cloned().collect();
        let new_goals: BTreeSet<Literal> = step.iter().flat_map(|a| a.precondition.iter().cloned()).collect();
        trace!("S{}: trying {:?}", level, step.iter().map(|a| a.name.as_str()).collect::<Vec<_>>());
        let mut steps = self.extract(graph, &new_goals, level - 1, nogoods)?;
        steps.push(step);
        Some(steps)
    }
}

/// Every subset of `len` actions in counting order, minus the one the heuristic already tried.
fn fallback_candidates(len: usize, tried: Option<Subset>) -> impl Iterator<Item = Subset> {
    Subsets::new(len).filter(move |subset| tried.as_ref() != Some(subset))
}

impl SolutionExtractor for BackwardExtractor {
    fn extract(&self, graph: &PlanningGraph, goals: &BTreeSet<Literal>, level: usize, nogoods: &mut NoGoods) -> Option<Steps> {
        if nogoods.contains(level, goals) {
            trace!("S{}: known nogood", level);
            return None
        }
        if level == 0 {
            return if goals.iter().all(|g| graph.contains_literal(0, g)) { Some(Vec::new()) } else { None }
        }
        debug!("S{}: extracting {} goals", level, goals.len());

        let actions = graph.action_nodes(level - 1);
        let resolve = |subset: &Subset| subset.ones().map(|i| actions[i]).collect::<Vec<NodeId>>();

        if goals.iter().any(|g| graph.supporters(level, g).is_empty()) {
            debug!("S{}: some goal has no supporter", level);
            nogoods.insert(level, goals.clone());
            return None
        }

        let mut tried = None;
        if self.heuristic {
            if let Some(choice) = self.heuristic_choice(graph, goals, level) {
                let chosen = resolve(&choice);
                if self.is_valid(graph, &chosen, goals) {
                    if let Some(steps) = self.try_candidate(graph, &chosen, level, nogoods) {
                        return Some(steps)
                    }
                }
                tried = Some(choice);
            }
        }

        if actions.len() > self.warn_threshold {
            warn!("S{}: enumerating subsets of {} actions", level, actions.len());
        }
        for subset in fallback_candidates(actions.len(), tried) {
            let chosen = resolve(&subset);
            if !self.is_valid(graph, &chosen, goals) {
                continue
            }
            if let Some(steps) = self.try_candidate(graph, &chosen, level, nogoods) {
                return Some(steps)
            }
        }

        debug!("S{}: recording nogood", level);
        nogoods.insert(level, goals.clone());
        None
    }
}
