//! Skill assessment via a threshold-gated decision tree.
//!
//! The tree is built once as immutable configuration; traversal is a pure
//! function of (current node, rating). A node with no entry in the tree is
//! terminal and its identifier is the career label.

mod tree;

pub use tree::{AssessmentNode, DecisionTree, Edge, skill_name};
