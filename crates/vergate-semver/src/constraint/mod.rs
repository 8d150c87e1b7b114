//! Constraint types for version matching

mod bound;
pub mod constraint;
mod operator;

pub use bound::Bound;
pub use constraint::Constraint;
pub use operator::{Operator, UnrecognizedOperatorError};
