//! The leveled planning graph.
//!
//! Levels alternate between propositions and actions: `S0, A0, S1, A1, ...`. Level `t`
//! below stands for the pair `(St, At)`; the last level only has its state layer until the
//! graph is expanded again. Mutex edges only ever join two nodes of the same kind on the
//! same level and are never removed once added.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use crate::pddl::action::Action;
use crate::pddl::literal::Literal;
use super::node::{GraphNode, NodeId};

#[derive(Debug, Clone, Default)]
pub struct Level {
    pub states: Vec<NodeId>,
    pub actions: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct PlanningGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<GraphNode, NodeId>,
    pub(super) levels: Vec<Level>,
    /// Unordered pairs, stored as `(min, max)`.
    mutex: HashSet<(NodeId, NodeId)>,
    /// Action node -> its precondition state nodes on the same level.
    preconditions: HashMap<NodeId, Vec<NodeId>>,
    /// State node -> action nodes one level below that produce it.
    supporters: HashMap<NodeId, Vec<NodeId>>,
}

impl PlanningGraph {
    /// Level 0 of the graph: one state node per initial literal.
    pub fn new<I: IntoIterator<Item = Literal>>(initial_state: I) -> Self {
        let mut graph = PlanningGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            levels: vec![Level::default()],
            mutex: HashSet::new(),
            preconditions: HashMap::new(),
            supporters: HashMap::new(),
        };
        for literal in initial_state {
            graph.add_state(0, literal);
        }
        graph
    }

    /// Deepest state level.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.levels.len() - 1
    }

    #[inline]
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id]
    }

    pub fn state_nodes(&self, level: usize) -> &[NodeId] {
        self.levels.get(level).map_or(&[][..], |l| l.states.as_slice())
    }

    pub fn action_nodes(&self, level: usize) -> &[NodeId] {
        self.levels.get(level).map_or(&[][..], |l| l.actions.as_slice())
    }

    pub fn literals(&self, level: usize) -> BTreeSet<Literal> {
        self.state_nodes(level).iter().filter_map(|&id| self.nodes[id].literal()).cloned().collect()
    }

    pub fn actions(&self, level: usize) -> impl Iterator<Item = &Action> + '_ {
        self.action_nodes(level).iter().filter_map(move |&id| self.nodes[id].action())
    }

    pub fn find_state(&self, level: usize, literal: &Literal) -> Option<NodeId> {
        self.index.get(&GraphNode::State { level, literal: literal.clone() }).copied()
    }

    #[inline]
    pub fn contains_literal(&self, level: usize, literal: &Literal) -> bool {
        self.find_state(level, literal).is_some()
    }

    /// Lowest level on which `literal` appears, if it appears at all.
    pub fn level_cost(&self, literal: &Literal) -> Option<usize> {
        (0..self.levels.len()).find(|&t| self.contains_literal(t, literal))
    }

    pub fn preconditions(&self, action: NodeId) -> &[NodeId] {
        self.preconditions.get(&action).map_or(&[][..], |v| v.as_slice())
    }

    /// Action nodes on `level - 1` whose effects contain `literal`, in level order.
    pub fn supporters(&self, level: usize, literal: &Literal) -> &[NodeId] {
        self.find_state(level, literal)
            .and_then(|id| self.supporters.get(&id))
            .map_or(&[][..], |v| v.as_slice())
    }

    #[inline]
    pub fn is_mutex(&self, a: NodeId, b: NodeId) -> bool {
        self.mutex.contains(&(a.min(b), a.max(b)))
    }

    pub fn state_mutex_count(&self, level: usize) -> usize {
        self.mutex.iter().filter(|(a, b)| {
            self.nodes[*a].is_state() && self.nodes[*a].level() == level && self.nodes[*b].is_state()
        }).count()
    }

    pub fn action_mutex_count(&self, level: usize) -> usize {
        self.mutex.iter().filter(|(a, b)| {
            !self.nodes[*a].is_state() && self.nodes[*a].level() == level && !self.nodes[*b].is_state()
        }).count()
    }

    /// Every goal is on level `t` and no two of them are mutex there.
    pub fn all_goals_non_mutex(&self, goals: &BTreeSet<Literal>, t: usize) -> bool {
        let mut ids = Vec::with_capacity(goals.len());
        for goal in goals {
            match self.find_state(t, goal) {
                Some(id) => ids.push(id),
                None => return false,
            }
        }
        ids.iter().enumerate().all(|(i, &a)| ids[i + 1..].iter().all(|&b| !self.is_mutex(a, b)))
    }

    /// The two most recent levels have the same shape: same literals with the same number of
    /// mutex pairs, produced by the same actions.
    pub fn has_leveled_off(&self) -> bool {
        let max = self.max_level();
        if max < 2 {
            return false
        }
        let new_actions: HashSet<&Action> = self.actions(max - 1).collect();
        let old_actions: HashSet<&Action> = self.actions(max - 2).collect();
        self.literals(max) == self.literals(max - 1)
            && new_actions == old_actions
            && self.state_mutex_count(max) == self.state_mutex_count(max - 1)
    }

    pub(super) fn add_state(&mut self, level: usize, literal: Literal) -> NodeId {
        if let Some(id) = self.find_state(level, &literal) {
            return id
        }
        let id = self.add_node(GraphNode::State { level, literal });
        self.levels[level].states.push(id);
        id
    }

    /// Adds an action node with its precondition links. Returns `None` for an action that
    /// is already on the level.
    pub(super) fn add_action(&mut self, level: usize, action: Action) -> Option<NodeId> {
        let node = GraphNode::Action { level, action };
        if self.index.contains_key(&node) {
            return None
        }
        let links: Vec<NodeId> = match &node {
            GraphNode::Action { action, .. } => action.precondition.iter().filter_map(|p| self.find_state(level, p)).collect(),
            GraphNode::State { .. } => Vec::new(),
        };
        let id = self.add_node(node);
        self.levels[level].actions.push(id);
        self.preconditions.insert(id, links);
        Some(id)
    }

    pub(super) fn add_support(&mut self, state: NodeId, action: NodeId) {
        self.supporters.entry(state).or_default().push(action);
    }

    pub(super) fn set_mutex(&mut self, a: NodeId, b: NodeId) {
        debug_assert_eq!(self.nodes[a].level(), self.nodes[b].level(), "mutex across levels");
        debug_assert_eq!(self.nodes[a].is_state(), self.nodes[b].is_state(), "mutex across node kinds");
        self.mutex.insert((a.min(b), a.max(b)));
    }

    fn add_node(&mut self, node: GraphNode) -> NodeId {
        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        id
    }
}

impl fmt::Display for PlanningGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (t, level) in self.levels.iter().enumerate() {
            let states = level.states.iter().fold(String::new(), |acc, &id| acc + " " + &self.nodes[id].literal().map_or(String::new(), |l| l.to_string()));
            writeln!(f, "S{}:{}", t, states)?;
            for (i, &a) in level.states.iter().enumerate() {
                for &b in &level.states[i + 1..] {
                    if self.is_mutex(a, b) {
                        writeln!(f, "\tmutex {} / {}", self.nodes[a], self.nodes[b])?;
                    }
                }
            }
            if !level.actions.is_empty() {
                let actions = level.actions.iter().fold(String::new(), |acc, &id| acc + " " + &self.nodes[id].action().map_or(String::new(), |a| a.to_string()));
                writeln!(f, "A{}:{}", t, actions)?;
                writeln!(f, "\t{} mutex pairs", self.action_mutex_count(t))?;
            }
        }
        Ok(())
    }
}
