use super::*;
use crate::NodeId;
use petgraph::Direction;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// The model as a rooted graph: one vertex per node, one edge per
/// parent-child link weighted by the branch it represents.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    graph: DiGraph<NodeId, Branch>,
    index: HashMap<NodeId, NodeIndex>,
    root: NodeIndex,
}

impl Hierarchy {
    pub fn root(&self) -> NodeId {
        self.graph[self.root]
    }
    pub fn graph(&self) -> &DiGraph<NodeId, Branch> {
        &self.graph
    }
    /// Children of a node ordered left then right.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let Some(&ix) = self.index.get(&id) else {
            return Vec::new();
        };
        let mut kids = self
            .graph
            .edges_directed(ix, Direction::Outgoing)
            .map(|e| (*e.weight(), self.graph[e.target()]))
            .collect::<Vec<_>>();
        kids.sort();
        kids.into_iter().map(|(_, id)| id).collect()
    }
    /// Parent-child pairs in depth-first, left-first order.
    pub fn links(&self) -> Vec<(NodeId, NodeId)> {
        let mut links = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let kids = self.children(id);
            kids.iter().for_each(|&kid| links.push((id, kid)));
            stack.extend(kids.into_iter().rev());
        }
        links
    }
}

impl From<&Model> for Hierarchy {
    fn from(model: &Model) -> Self {
        let mut graph = DiGraph::with_capacity(model.len(), model.len().saturating_sub(1));
        let index = model
            .nodes()
            .map(|n| (n.id(), graph.add_node(n.id())))
            .collect::<HashMap<_, _>>();
        for node in model.nodes() {
            for (branch, child) in node.split_rule().map(Split::children).into_iter().flatten() {
                graph.add_edge(index[&node.id()], index[&child], branch);
            }
        }
        let root = index[&model.root()];
        Self { graph, index, root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::new(
            0,
            vec![
                TreeNode::split(0, 0, 1.0, 1, 2),
                TreeNode::split(1, 1, 2.0, 3, 4),
                TreeNode::leaf(2, 0.0),
                TreeNode::leaf(3, 1.0),
                TreeNode::leaf(4, 2.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn children_are_left_first() {
        let hierarchy = Hierarchy::from(&model());
        assert_eq!(hierarchy.root(), 0);
        assert_eq!(hierarchy.children(0), vec![1, 2]);
        assert_eq!(hierarchy.children(1), vec![3, 4]);
        assert!(hierarchy.children(2).is_empty());
    }
    #[test]
    fn links_cover_every_edge_once() {
        let hierarchy = Hierarchy::from(&model());
        assert_eq!(hierarchy.links(), vec![(0, 1), (1, 3), (1, 4), (0, 2)]);
        assert_eq!(hierarchy.graph().edge_count(), 4);
    }
}
