use std::fmt;
use crate::pddl::action::Action;
use crate::pddl::literal::Literal;

/// Index of a node inside a [`PlanningGraph`](super::graph::PlanningGraph).
pub type NodeId = usize;

/// A vertex of the planning graph. Two nodes are the same node when they sit on the same
/// level and carry the same payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphNode {
    State { level: usize, literal: Literal },
    Action { level: usize, action: Action },
}

impl GraphNode {
    #[inline]
    pub fn level(&self) -> usize {
        match self {
            GraphNode::State { level, .. } |
            GraphNode::Action { level, .. } => *level,
        }
    }

    pub fn literal(&self) -> Option<&Literal> {
        match self {
            GraphNode::State { literal, .. } => Some(literal),
            GraphNode::Action { .. } => None,
        }
    }

    pub fn action(&self) -> Option<&Action> {
        match self {
            GraphNode::Action { action, .. } => Some(action),
            GraphNode::State { .. } => None,
        }
    }

    pub fn is_state(&self) -> bool {
        matches!(self, GraphNode::State { .. })
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphNode::State { level, literal } => write!(f, "S{}:{}", level, literal),
            GraphNode::Action { level, action } => write!(f, "A{}:{}", level, action),
        }
    }
}
