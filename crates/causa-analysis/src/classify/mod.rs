//! Ordered classification rule tables.
//!
//! Each table is a fixed list of `(node types, keywords) → outcome` rules,
//! evaluated in order; the first rule that matches wins. Keywords are matched
//! case-insensitively as substrings of the node name.

pub mod impact_rules;
pub mod root_cause_rules;

use causa_core::graph::{CausalNode, NodeType};

pub use impact_rules::infer_impact_type;
pub use root_cause_rules::classify_root_cause;

/// One classification rule. Matches when the node's type is listed, or when
/// any keyword occurs in the node's name.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<C: Copy + 'static> {
    pub outcome: C,
    pub node_types: &'static [NodeType],
    pub keywords: &'static [&'static str],
}

impl<C: Copy + 'static> KeywordRule<C> {
    pub fn matches(&self, node_type: NodeType, lowered_name: &str) -> bool {
        self.node_types.contains(&node_type)
            || self.keywords.iter().any(|k| lowered_name.contains(k))
    }
}

/// Outcome of the first matching rule, if any.
pub fn first_match<C: Copy + 'static>(rules: &[KeywordRule<C>], node: &CausalNode) -> Option<C> {
    let lowered = node.name.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(node.node_type, &lowered))
        .map(|rule| rule.outcome)
}
