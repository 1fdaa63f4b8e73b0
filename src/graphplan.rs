pub mod expand;
pub mod extractor;
pub mod graph;
pub mod node;
pub mod nogoods;
pub mod planner;
pub mod subsets;

pub use extractor::{BackwardExtractor, SolutionExtractor};
pub use graph::PlanningGraph;
pub use nogoods::NoGoods;
pub use planner::{leveled_off, GraphPlan, GraphPlanConfig, Plan, Solution};
