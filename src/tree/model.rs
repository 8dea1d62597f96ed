use super::*;
use crate::NodeId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::VecDeque;

/// Model document as written by the exporter.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub root: NodeId,
    pub nodes: Vec<RawNode>,
}

/// A fixed binary regression tree.
/// Construction validates the structure, so every reference resolves,
/// every non-root node has exactly one parent and every node is reachable.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    root: NodeId,
    nodes: BTreeMap<NodeId, TreeNode>,
}

impl Model {
    pub fn new(root: NodeId, nodes: Vec<TreeNode>) -> Result<Self, ModelError> {
        let mut map = BTreeMap::new();
        for node in nodes {
            let id = node.id();
            if map.insert(id, node).is_some() {
                return Err(ModelError::DuplicateNode(id));
            }
        }
        let this = Self { root, nodes: map };
        this.validate()?;
        Ok(this)
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ModelError> {
        Self::try_from(std::fs::read_to_string(path)?.as_str())
    }
    pub fn root(&self) -> NodeId {
        self.root
    }
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.values()
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn leaves(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes().filter(|n| n.is_leaf())
    }
    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(split) = self.get(id).and_then(TreeNode::split_rule) {
                stack.push((split.left, depth + 1));
                stack.push((split.right, depth + 1));
            }
        }
        deepest
    }
    /// Every split must name its feature in the metadata.
    pub fn check(&self, meta: &Meta) -> Result<(), ModelError> {
        self.nodes()
            .filter_map(|n| n.split_rule().map(|s| (n.id(), s.feature)))
            .find(|(_, feature)| meta.feature(*feature).is_none())
            .map_or(Ok(()), |(node, feature)| {
                Err(ModelError::UnnamedFeature { node, feature })
            })
    }
    /// Human-readable summary of a node, used for inspection.
    pub fn describe(&self, id: NodeId, meta: &Meta) -> Option<String> {
        let node = self.get(id)?;
        let mut lines = Vec::new();
        match node.kind() {
            Kind::Leaf(value) => lines.push(format!("leaf {}: predict {:.4}", id, value)),
            Kind::Split(split) => {
                let name = meta.feature(split.feature).unwrap_or("?");
                lines.push(format!("split {}: {} <= {:.4}", id, name, split.threshold));
                lines.push(format!("  left {} / right {}", split.left, split.right));
                if let Some(stats) = meta.feature_stats(name) {
                    lines.push(format!(
                        "  {} range [{:.4}, {:.4}] median {:.4}",
                        name, stats.min, stats.max, stats.median
                    ));
                }
                if let Some(mean) = node.mean() {
                    lines.push(format!("  mean {:.4}", mean));
                }
            }
        }
        if let Some(samples) = node.samples() {
            lines.push(format!("  samples {}", samples));
        }
        if let Some(impurity) = node.impurity() {
            lines.push(format!("  impurity {:.4}", impurity));
        }
        Some(lines.join("\n"))
    }
}

impl Model {
    fn validate(&self) -> Result<(), ModelError> {
        if !self.nodes.contains_key(&self.root) {
            return Err(ModelError::MissingRoot(self.root));
        }
        let mut parents = HashMap::<NodeId, NodeId>::new();
        for node in self.nodes() {
            for (_, child) in node.split_rule().map(Split::children).into_iter().flatten() {
                if !self.nodes.contains_key(&child) {
                    return Err(ModelError::DanglingChild {
                        parent: node.id(),
                        child,
                    });
                }
                if child == self.root {
                    return Err(ModelError::RootHasParent(child));
                }
                if parents.insert(child, node.id()).is_some() {
                    return Err(ModelError::SecondParent(child));
                }
            }
        }
        let mut seen = std::collections::HashSet::new();
        let mut queue = VecDeque::from([self.root]);
        while let Some(id) = queue.pop_front() {
            if seen.insert(id) {
                if let Some(split) = self.get(id).and_then(TreeNode::split_rule) {
                    queue.push_back(split.left);
                    queue.push_back(split.right);
                }
            }
        }
        match self.nodes.keys().find(|id| !seen.contains(id)) {
            Some(id) => Err(ModelError::Unreachable(*id)),
            None => Ok(()),
        }
    }
}

impl TryFrom<Document> for Model {
    type Error = ModelError;
    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let nodes = doc
            .nodes
            .into_iter()
            .map(TreeNode::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(doc.root, nodes)
    }
}

impl TryFrom<&str> for Model {
    type Error = ModelError;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Self::try_from(serde_json::from_str::<Document>(json)?)
    }
}
