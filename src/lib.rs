//! GraphPlan for grounded STRIPS problems.
//!
//! A [`Problem`](pddl::problem::Problem) is turned into a leveled planning graph that is grown
//! one level at a time until every goal appears without mutex; a backward search then
//! extracts a [`Plan`](graphplan::Plan). When both the graph and the recorded failures stop
//! changing, the problem has no solution and [`GraphPlan::plan`](graphplan::GraphPlan::plan)
//! returns `None`.
//!
//! ```
//! use graphplan::graphplan::{GraphPlan, GraphPlanConfig};
//! use graphplan::pddl::problems;
//!
//! let problem = problems::spare_tire().unwrap();
//! let plan = GraphPlan::new(GraphPlanConfig::default()).plan(&problem).unwrap();
//! assert!(plan.validate(&problem));
//! ```

#[macro_use]
pub mod pddl;
pub mod graphplan;

pub use crate::graphplan::{GraphPlan, GraphPlanConfig, Plan};
pub use crate::pddl::{action::Action, literal::Literal, problem::Problem, Error};
