//! Damage system - dice expressions and their worst-case value

mod expression;

pub use expression::DamageExpression;
