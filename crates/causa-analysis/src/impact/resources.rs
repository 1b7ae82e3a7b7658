//! Affected-resource aggregation.

use std::collections::{BTreeSet, HashMap};

use causa_core::models::{AffectedResource, ProjectedImpact, Severity};
use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedGraph;
use crate::traversal::forward::ForwardStep;
use crate::traversal::reach::dependency_depth;

/// Group impacts by `(resource type, resource id)`, in first-seen order.
///
/// Each group keeps the worst severity seen, the union of impact types, and
/// the deepest dependency depth among its impacted nodes. Impacts on nodes
/// without a resource are not aggregated.
pub fn aggregate(
    graph: &IndexedGraph,
    steps: &[ForwardStep],
    impacts: &[ProjectedImpact],
    max_nodes: usize,
) -> Vec<AffectedResource> {
    let mut resources: Vec<AffectedResource> = Vec::new();
    let mut positions: HashMap<(&str, &str), usize> = HashMap::new();
    let mut depths: HashMap<NodeIndex, usize> = HashMap::new();

    for (step, impact) in steps.iter().zip(impacts) {
        let Some(resource) = graph.node(step.target).resource.as_ref() else {
            continue;
        };
        let depth = *depths
            .entry(step.target)
            .or_insert_with(|| dependency_depth(graph, step.target, max_nodes));
        let severity = Severity::from_magnitude(impact.magnitude);

        let key = (resource.resource_type.as_str(), resource.id.as_str());
        match positions.get(&key) {
            Some(&pos) => {
                let entry = &mut resources[pos];
                entry.impact_severity = entry.impact_severity.worst(severity);
                entry.impact_types.insert(impact.impact_type);
                entry.dependency_depth = entry.dependency_depth.max(depth);
            }
            None => {
                positions.insert(key, resources.len());
                resources.push(AffectedResource {
                    resource: resource.clone(),
                    impact_severity: severity,
                    impact_types: BTreeSet::from([impact.impact_type]),
                    dependency_depth: depth,
                });
            }
        }
    }

    resources
}
