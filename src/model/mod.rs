//! The loaded regression model artifact and its building blocks.

pub mod regressor;
pub mod tree;

pub use self::regressor::{GradientBoostedModel, LinearModel, ModelKind, SkillModel};
pub use self::tree::{Node, RegressionTree, SplitCondition};
