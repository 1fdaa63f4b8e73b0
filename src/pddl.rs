#[macro_use]
pub mod expression;
pub mod action;
pub mod error;
pub mod literal;
pub mod problem;
pub mod problems;
pub mod state;

mod utils;

pub use error::Error;
